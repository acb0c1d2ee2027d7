//! Application contract and application descriptors.

use std::fmt;
use std::sync::Arc;

use crate::Result;
use crate::input::InputEvent;
use crate::render::{Drawer, RenderContext};
use crate::window::Window;

/// Context handed to [`Application::prepare`].
pub struct ApplicationContext<'a> {
    /// True when the window has no visible surface.
    pub headless: bool,
    /// The window the application runs in, if one exists.
    pub window: Option<&'a dyn Window>,
}

/// A sample application driven by the platform run-loop.
///
/// At most one application is live at a time. The platform creates it from an
/// [`AppInfo`], prepares it, updates it once per frame and finishes it before
/// the next one is created.
pub trait Application {
    /// Display name.
    fn name(&self) -> &str;

    /// Sets the display name from the descriptor the app was created from.
    fn set_name(&mut self, name: String);

    /// Prepares the application for its first frame.
    fn prepare(&mut self, context: &ApplicationContext<'_>) -> Result<()>;

    /// Advances the application by `delta_time` seconds.
    fn update(&mut self, delta_time: f32) -> Result<()>;

    /// Updates the UI overlay, calling `overlay` with the drawer so plugins
    /// can contribute to it.
    fn update_overlay(
        &mut self,
        _delta_time: f32,
        overlay: &mut dyn FnMut(&mut dyn Drawer) -> Result<()>,
    ) -> Result<()> {
        match self.drawer() {
            Some(drawer) => overlay(drawer),
            None => Ok(()),
        }
    }

    /// Handles a surface resize.
    fn resize(&mut self, _width: u32, _height: u32) -> Result<()> {
        Ok(())
    }

    /// Handles an input event.
    fn input_event(&mut self, _event: &InputEvent) -> Result<()> {
        Ok(())
    }

    /// Returns true when the application wants to close.
    fn should_close(&self) -> bool {
        false
    }

    /// Releases resources; called exactly once before the app is dropped.
    fn finish(&mut self) {}

    /// Overlay drawer, if the application has a UI overlay.
    fn drawer(&mut self) -> Option<&mut dyn Drawer> {
        None
    }

    /// Render context, if one is ready.
    fn render_context(&mut self) -> Option<&mut dyn RenderContext> {
        None
    }
}

/// Factory producing a fresh application instance.
pub type AppFactory = Arc<dyn Fn() -> Result<Box<dyn Application>> + Send + Sync>;

/// Describes an application that can be requested.
#[derive(Clone)]
pub struct AppInfo {
    /// Unique identifier used on the command line.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Free-form tags.
    pub tags: Vec<String>,
    factory: AppFactory,
}

impl AppInfo {
    /// Creates a descriptor.
    pub fn new<F>(id: impl Into<String>, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Result<Box<dyn Application>> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            tags: Vec::new(),
            factory: Arc::new(factory),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Creates a new application instance.
    pub fn create(&self) -> Result<Box<dyn Application>> {
        (self.factory)()
    }
}

impl fmt::Debug for AppInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppInfo")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("description", &self.description)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}
