//! `--stop-after-frame <n>`: closes after a fixed number of frames.

use std::collections::VecDeque;

use samplehost_core::Result;
use samplehost_plugins::{Flag, Hook, Host, Plugin};

use super::take_value;

const OPTIONS: &[Flag] = &[Flag::new(
    "stop-after-frame",
    "Close after the given number of frames",
)];
const HOOKS: &[Hook] = &[Hook::OnUpdate];

#[derive(Debug, Default)]
pub struct StopAfter {
    remaining: u32,
}

impl Plugin for StopAfter {
    fn name(&self) -> &str {
        "Stop After"
    }

    fn description(&self) -> &str {
        "Stop the run after a number of frames"
    }

    fn options(&self) -> &[Flag] {
        OPTIONS
    }

    fn hooks(&self) -> &[Hook] {
        HOOKS
    }

    fn handle_option(
        &mut self,
        _option: &str,
        args: &mut VecDeque<String>,
        _host: &mut dyn Host,
    ) -> bool {
        match take_value::<u32>(args) {
            Some(frames) if frames > 0 => {
                self.remaining = frames;
                true
            }
            _ => {
                tracing::error!("--stop-after-frame expects a frame count above zero");
                false
            }
        }
    }

    fn on_update(&mut self, _delta_time: f32, host: &mut dyn Host) -> Result<()> {
        if self.remaining == 0 {
            return Ok(());
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            tracing::info!("Frame limit reached");
            host.close();
        }
        Ok(())
    }
}
