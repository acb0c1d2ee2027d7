//! Window contract and window properties.

use std::fmt;

use crate::Result;
use crate::geometry::Extent;
use crate::input::InputEvent;

/// How the window is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowMode {
    /// No visible surface.
    Headless,
    /// Exclusive fullscreen.
    Fullscreen,
    /// Borderless window covering the display.
    FullscreenBorderless,
    /// Fullscreen with the content stretched to the display.
    FullscreenStretch,
    /// Regular decorated window.
    #[default]
    Default,
}

impl WindowMode {
    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<WindowMode> {
        match s.to_lowercase().as_str() {
            "headless" => Some(WindowMode::Headless),
            "fullscreen" => Some(WindowMode::Fullscreen),
            "borderless" | "fullscreen-borderless" => Some(WindowMode::FullscreenBorderless),
            "stretch" | "fullscreen-stretch" => Some(WindowMode::FullscreenStretch),
            "default" | "windowed" => Some(WindowMode::Default),
            _ => None,
        }
    }
}

impl fmt::Display for WindowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowMode::Headless => write!(f, "headless"),
            WindowMode::Fullscreen => write!(f, "fullscreen"),
            WindowMode::FullscreenBorderless => write!(f, "borderless"),
            WindowMode::FullscreenStretch => write!(f, "stretch"),
            WindowMode::Default => write!(f, "default"),
        }
    }
}

/// Vertical synchronisation preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Vsync {
    /// Present immediately.
    Off,
    /// Wait for vertical blank.
    On,
    /// Let the presenter decide.
    #[default]
    Default,
}

/// Properties a window is created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowProperties {
    /// Window title.
    pub title: String,
    /// Presentation mode.
    pub mode: WindowMode,
    /// Whether the user may resize the window.
    pub resizable: bool,
    /// Vsync preference.
    pub vsync: Vsync,
    /// Requested size.
    pub extent: Extent,
}

impl Default for WindowProperties {
    fn default() -> Self {
        Self {
            title: String::new(),
            mode: WindowMode::Default,
            resizable: true,
            vsync: Vsync::Default,
            extent: Extent::new(1280, 720),
        }
    }
}

impl WindowProperties {
    /// Applies every field that is set in `overrides`, keeping the rest.
    pub fn merge(&mut self, overrides: &OptionalWindowProperties) {
        if let Some(title) = &overrides.title {
            self.title = title.clone();
        }
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(resizable) = overrides.resizable {
            self.resizable = resizable;
        }
        if let Some(vsync) = overrides.vsync {
            self.vsync = vsync;
        }
        if let Some(width) = overrides.extent.width {
            self.extent.width = width;
        }
        if let Some(height) = overrides.extent.height {
            self.extent.height = height;
        }
    }
}

/// Extent with independently optional dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionalExtent {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Partial window properties; unset fields keep their current value on merge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionalWindowProperties {
    pub title: Option<String>,
    pub mode: Option<WindowMode>,
    pub resizable: Option<bool>,
    pub vsync: Option<Vsync>,
    pub extent: OptionalExtent,
}

/// Events a window reports when polled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowEvent {
    /// Keyboard or mouse input.
    Input(InputEvent),
    /// The surface was resized by the user or the system.
    Resize { width: u32, height: u32 },
    /// The window gained or lost focus.
    Focus(bool),
}

/// A window owned by the platform.
pub trait Window {
    /// Properties the window was created with.
    fn properties(&self) -> &WindowProperties;

    /// Current size.
    fn extent(&self) -> Extent;

    /// Asks for a new size and returns the size actually granted.
    fn resize(&mut self, extent: Extent) -> Extent;

    /// Asks the window to close at the next opportunity.
    fn close(&mut self);

    /// Returns true once the window wants to close.
    fn should_close(&self) -> bool;

    /// Polls pending events without blocking.
    fn process_events(&mut self) -> Result<Vec<WindowEvent>>;
}

/// Creates windows on behalf of the platform.
pub trait WindowFactory {
    /// Creates a window with the given properties.
    fn create(&mut self, properties: &WindowProperties) -> Result<Box<dyn Window>>;
}

impl<F> WindowFactory for F
where
    F: FnMut(&WindowProperties) -> Result<Box<dyn Window>>,
{
    fn create(&mut self, properties: &WindowProperties) -> Result<Box<dyn Window>> {
        self(properties)
    }
}
