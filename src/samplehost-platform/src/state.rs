//! Host state shared with plugins during dispatch and hook callbacks.

use samplehost_core::{AppInfo, OptionalWindowProperties, Window, WindowProperties};
use samplehost_plugins::Host;

/// The part of the platform plugins are allowed to steer.
///
/// Kept apart from the plugin list and the active application so both can be
/// borrowed while a plugin holds `&mut dyn Host`.
pub struct PlatformState {
    pub(crate) requested_app: Option<AppInfo>,
    pub(crate) close_requested: bool,
    pub(crate) window: Option<Box<dyn Window>>,
    pub(crate) window_properties: WindowProperties,
    /// Fixed update step in seconds, when simulation is pinned to a rate.
    pub(crate) simulation_frame_time: Option<f32>,
    pub(crate) always_render: bool,
    pub(crate) process_input_events: bool,
    pub(crate) focused: bool,
}

impl Default for PlatformState {
    fn default() -> Self {
        Self {
            requested_app: None,
            close_requested: false,
            window: None,
            window_properties: WindowProperties::default(),
            simulation_frame_time: None,
            always_render: false,
            process_input_events: true,
            focused: true,
        }
    }
}

impl PlatformState {
    /// Application waiting to be started.
    pub fn requested_app(&self) -> Option<&AppInfo> {
        self.requested_app.as_ref()
    }

    /// The window, once created.
    pub fn window(&self) -> Option<&dyn Window> {
        self.window.as_deref()
    }

    /// Fixed update step, if one was forced.
    pub fn simulation_frame_time(&self) -> Option<f32> {
        self.simulation_frame_time
    }

    pub fn always_render(&self) -> bool {
        self.always_render
    }

    pub fn process_input_events(&self) -> bool {
        self.process_input_events
    }

    pub fn focused(&self) -> bool {
        self.focused
    }
}

impl Host for PlatformState {
    fn request_application(&mut self, app: AppInfo) {
        tracing::debug!("Application {} requested", app.id);
        self.requested_app = Some(app);
    }

    fn app_requested(&self) -> bool {
        self.requested_app.is_some()
    }

    fn close(&mut self) {
        if let Some(window) = self.window.as_mut() {
            window.close();
        }
        // Also covers closes requested before the window exists.
        self.close_requested = true;
    }

    fn close_requested(&self) -> bool {
        self.close_requested
    }

    fn force_simulation_fps(&mut self, fps: f32) {
        if fps.is_finite() && fps > 0.0 {
            self.simulation_frame_time = Some(1.0 / fps);
        } else {
            tracing::warn!("Ignoring invalid simulation rate {}", fps);
        }
    }

    fn force_render(&mut self, always_render: bool) {
        self.always_render = always_render;
    }

    fn disable_input_processing(&mut self) {
        self.process_input_events = false;
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn set_window_properties(&mut self, properties: &OptionalWindowProperties) {
        self.window_properties.merge(properties);
    }

    fn window_properties(&self) -> &WindowProperties {
        &self.window_properties
    }
}
