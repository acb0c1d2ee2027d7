//! Window implementations shipped with the platform.
//!
//! - [`HeadlessWindow`]: no surface, never produces events
//! - [`TerminalWindow`]: the controlling terminal in raw mode

mod headless;
mod terminal;

pub use headless::HeadlessWindow;
pub use terminal::TerminalWindow;

use samplehost_core::{Result, Window, WindowMode, WindowProperties};

/// Creates a headless window for [`WindowMode::Headless`] and a terminal
/// window for every other mode.
///
/// Usable directly as a [`WindowFactory`](samplehost_core::WindowFactory).
pub fn create_window(properties: &WindowProperties) -> Result<Box<dyn Window>> {
    match properties.mode {
        WindowMode::Headless => Ok(Box::new(HeadlessWindow::new(properties.clone()))),
        _ => Ok(Box::new(TerminalWindow::new(properties.clone())?)),
    }
}
