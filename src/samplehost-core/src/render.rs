//! Render context and overlay drawer contracts.
//!
//! The host never renders. These traits are the narrow views plugins get of
//! an application's rendering state through the post-draw and UI-overlay
//! hooks.

use crate::geometry::Extent;

/// Read-mostly view of an application's render state after a frame.
pub trait RenderContext {
    /// Size of the surface the frame was rendered to.
    fn surface_extent(&self) -> Extent;

    /// Number of frames rendered so far.
    fn frame_count(&self) -> u64;
}

/// Immediate-mode overlay the UI-overlay hook draws into.
pub trait Drawer {
    /// Adds a line of text.
    fn text(&mut self, text: &str);

    /// Adds a collapsible section header; returns true when it is expanded.
    fn header(&mut self, caption: &str) -> bool;

    /// Adds a checkbox; returns true when the value changed this frame.
    fn checkbox(&mut self, caption: &str, value: &mut bool) -> bool;
}
