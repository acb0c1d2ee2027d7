//! Window options: size, presentation mode, vsync and resizability.

use std::collections::VecDeque;

use samplehost_core::{OptionalWindowProperties, Vsync, WindowMode};
use samplehost_plugins::{Flag, Host, Plugin};

use super::take_value;

const OPTIONS: &[Flag] = &[
    Flag::new("width", "Initial window width"),
    Flag::new("height", "Initial window height"),
    Flag::new("headless", "Run without a visible window"),
    Flag::new("fullscreen", "Run in fullscreen mode"),
    Flag::new("borderless", "Run in borderless fullscreen mode"),
    Flag::new("stretch", "Stretch the content to the display"),
    Flag::new("vsync", "Force vsync on or off: --vsync on|off"),
    Flag::new("fixed-size", "Prevent the window from being resized"),
];

/// Collects window overrides and applies each one as it is parsed.
#[derive(Debug, Default)]
pub struct WindowOptions {
    properties: OptionalWindowProperties,
}

impl WindowOptions {
    /// Overrides collected so far.
    pub fn properties(&self) -> &OptionalWindowProperties {
        &self.properties
    }

    fn apply(&mut self, option: &str, args: &mut VecDeque<String>) -> Result<(), String> {
        match option {
            "width" => {
                let width = take_value::<u32>(args).ok_or("--width expects a number")?;
                self.properties.extent.width = Some(width);
            }
            "height" => {
                let height = take_value::<u32>(args).ok_or("--height expects a number")?;
                self.properties.extent.height = Some(height);
            }
            "headless" => self.properties.mode = Some(WindowMode::Headless),
            "fullscreen" => self.properties.mode = Some(WindowMode::Fullscreen),
            "borderless" => self.properties.mode = Some(WindowMode::FullscreenBorderless),
            "stretch" => self.properties.mode = Some(WindowMode::FullscreenStretch),
            "vsync" => {
                let vsync = match take_value::<String>(args).as_deref() {
                    Some("on") => Vsync::On,
                    Some("off") => Vsync::Off,
                    _ => return Err("--vsync expects on or off".to_string()),
                };
                self.properties.vsync = Some(vsync);
            }
            "fixed-size" => self.properties.resizable = Some(false),
            other => return Err(format!("--{other} is not a window option")),
        }
        Ok(())
    }
}

impl Plugin for WindowOptions {
    fn name(&self) -> &str {
        "Window Options"
    }

    fn description(&self) -> &str {
        "Configure the window the sample runs in"
    }

    fn options(&self) -> &[Flag] {
        OPTIONS
    }

    fn handle_option(
        &mut self,
        option: &str,
        args: &mut VecDeque<String>,
        host: &mut dyn Host,
    ) -> bool {
        if let Err(message) = self.apply(option, args) {
            tracing::error!("{}", message);
            return false;
        }
        host.set_window_properties(&self.properties);
        true
    }
}
