//! Core types and contracts for `samplehost`.
//!
//! This crate holds the vocabulary shared by the plugin system, the platform
//! run-loop and the binary:
//!
//! - [`error`]: the host error type and `Result` alias
//! - [`exit`]: exit codes produced by dispatch and by every frame
//! - [`geometry`]: window extents
//! - [`window`]: the window contract and window properties
//! - [`application`]: the application contract and application descriptors
//! - [`render`]: render context and overlay drawer contracts
//! - [`input`]: keyboard and mouse input events
//!
//! # Example
//!
//! ```
//! use samplehost_core::window::{OptionalWindowProperties, WindowMode, WindowProperties};
//!
//! let mut properties = WindowProperties::default();
//! properties.merge(&OptionalWindowProperties {
//!     mode: Some(WindowMode::Headless),
//!     ..Default::default()
//! });
//!
//! assert_eq!(properties.mode, WindowMode::Headless);
//! assert_eq!(properties.extent.width, 1280);
//! ```

pub mod application;
pub mod error;
pub mod exit;
pub mod geometry;
pub mod input;
pub mod render;
pub mod window;

pub use application::{AppFactory, AppInfo, Application, ApplicationContext};
pub use error::{HostError, Result};
pub use exit::ExitCode;
pub use geometry::Extent;
pub use input::{
    EventSource, InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
pub use render::{Drawer, RenderContext};
pub use window::{
    OptionalExtent, OptionalWindowProperties, Vsync, Window, WindowEvent, WindowFactory,
    WindowMode, WindowProperties,
};

/// Smallest width a window may be resized to.
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Smallest height a window may be resized to.
pub const MIN_WINDOW_HEIGHT: u32 = 320;
