//! Heartbeat sample.

use samplehost_core::{
    Application, ApplicationContext, Drawer, Extent, InputEvent, RenderContext, Result,
};

/// Frame counter standing in for a GPU render context.
#[derive(Debug, Default)]
struct FrameStats {
    extent: Extent,
    frames: u64,
}

impl RenderContext for FrameStats {
    fn surface_extent(&self) -> Extent {
        self.extent
    }

    fn frame_count(&self) -> u64 {
        self.frames
    }
}

/// Overlay that keeps the lines drawn during the last frame.
#[derive(Debug, Default)]
struct TextOverlay {
    lines: Vec<String>,
    expanded: bool,
}

impl Drawer for TextOverlay {
    fn text(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn header(&mut self, caption: &str) -> bool {
        self.lines.push(format!("[{caption}]"));
        self.expanded
    }

    fn checkbox(&mut self, caption: &str, value: &mut bool) -> bool {
        let mark = if *value { 'x' } else { ' ' };
        self.lines.push(format!("[{mark}] {caption}"));
        false
    }
}

/// Counts frames and logs a heartbeat once a second. Never asks to close.
#[derive(Debug, Default)]
pub struct HelloApp {
    name: String,
    stats: FrameStats,
    overlay: TextOverlay,
    since_heartbeat: f32,
    keys: u64,
}

impl HelloApp {
    pub fn new() -> Self {
        Self {
            overlay: TextOverlay {
                expanded: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.stats.frames
    }

    /// Overlay lines drawn during the last frame.
    pub fn overlay_lines(&self) -> &[String] {
        &self.overlay.lines
    }
}

impl Application for HelloApp {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn prepare(&mut self, context: &ApplicationContext<'_>) -> Result<()> {
        self.stats.extent = context
            .window
            .map(|window| window.extent())
            .unwrap_or_default();
        tracing::info!(
            "{} prepared ({}, headless: {})",
            self.name,
            self.stats.extent,
            context.headless
        );
        Ok(())
    }

    fn update(&mut self, delta_time: f32) -> Result<()> {
        self.stats.frames += 1;
        self.since_heartbeat += delta_time;
        if self.since_heartbeat >= 1.0 {
            self.since_heartbeat -= 1.0;
            tracing::info!("{}: frame {}", self.name, self.stats.frames);
        }
        Ok(())
    }

    fn update_overlay(
        &mut self,
        _delta_time: f32,
        overlay: &mut dyn FnMut(&mut dyn Drawer) -> Result<()>,
    ) -> Result<()> {
        self.overlay.lines.clear();
        if self.overlay.header(&self.name) {
            self.overlay.text(&format!("frame {}", self.stats.frames));
            self.overlay.text(&format!("surface {}", self.stats.extent));
        }
        overlay(&mut self.overlay)
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.stats.extent = Extent::new(width, height);
        tracing::debug!("{} resized to {}", self.name, self.stats.extent);
        Ok(())
    }

    fn input_event(&mut self, event: &InputEvent) -> Result<()> {
        if event.as_key().is_some() {
            self.keys += 1;
        }
        tracing::trace!("{} received {}", self.name, event);
        Ok(())
    }

    fn finish(&mut self) {
        tracing::info!(
            "{} finished after {} frames and {} key events",
            self.name,
            self.stats.frames,
            self.keys
        );
    }

    fn drawer(&mut self) -> Option<&mut dyn Drawer> {
        Some(&mut self.overlay)
    }

    fn render_context(&mut self) -> Option<&mut dyn RenderContext> {
        Some(&mut self.stats)
    }
}
