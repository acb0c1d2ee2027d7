//! The control surface plugins use to steer the host.

use samplehost_core::{AppInfo, OptionalWindowProperties, WindowProperties};

/// Operations a plugin may perform on the host from a command or option
/// handler, a trigger, or a hook callback.
pub trait Host {
    /// Requests that `app` becomes the active application at the next frame.
    ///
    /// Only one request is pending at a time; a later request replaces an
    /// earlier one.
    fn request_application(&mut self, app: AppInfo);

    /// Returns true while an application request is pending.
    fn app_requested(&self) -> bool;

    /// Requests the host to close.
    fn close(&mut self);

    /// Returns true once a close has been requested.
    fn close_requested(&self) -> bool;

    /// Replaces measured frame time with a fixed step of `1 / fps` seconds.
    fn force_simulation_fps(&mut self, fps: f32);

    /// Keeps updating even while the window is unfocused.
    fn force_render(&mut self, always_render: bool);

    /// Stops forwarding input events to the active application.
    fn disable_input_processing(&mut self);

    /// Records whether the window has focus.
    fn set_focus(&mut self, focused: bool);

    /// Merges `properties` into the properties the window will be created with.
    fn set_window_properties(&mut self, properties: &OptionalWindowProperties);

    /// Properties the window will be (or was) created with.
    fn window_properties(&self) -> &WindowProperties;
}
