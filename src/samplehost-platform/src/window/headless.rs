//! Window without a visible surface.

use samplehost_core::{Extent, Result, Window, WindowEvent, WindowProperties};

/// A window that only tracks its extent and close state.
#[derive(Debug, Clone)]
pub struct HeadlessWindow {
    properties: WindowProperties,
    extent: Extent,
    should_close: bool,
}

impl HeadlessWindow {
    /// Creates a headless window with the requested extent.
    pub fn new(properties: WindowProperties) -> Self {
        let extent = properties.extent;
        tracing::debug!("Created headless window ({})", extent);
        Self {
            properties,
            extent,
            should_close: false,
        }
    }
}

impl Window for HeadlessWindow {
    fn properties(&self) -> &WindowProperties {
        &self.properties
    }

    fn extent(&self) -> Extent {
        self.extent
    }

    fn resize(&mut self, extent: Extent) -> Extent {
        self.extent = extent;
        self.extent
    }

    fn close(&mut self) {
        self.should_close = true;
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn process_events(&mut self) -> Result<Vec<WindowEvent>> {
        Ok(Vec::new())
    }
}
