//! `--log-fps`: logs the frame rate once a second.

use std::collections::VecDeque;

use samplehost_core::{RenderContext, Result};
use samplehost_plugins::{Flag, Hook, Host, Plugin};

const OPTIONS: &[Flag] = &[Flag::new("log-fps", "Log frames per second")];
const HOOKS: &[Hook] = &[Hook::PostDraw, Hook::OnUpdate, Hook::OnAppClose];

/// Seconds between two log lines.
const LOG_INTERVAL: f32 = 1.0;

#[derive(Debug, Default)]
pub struct FpsLogger {
    elapsed: f32,
    frames: u32,
    last_rendered: u64,
    /// Most recently logged rate.
    last_rate: Option<f32>,
}

impl FpsLogger {
    pub fn last_rate(&self) -> Option<f32> {
        self.last_rate
    }
}

impl Plugin for FpsLogger {
    fn name(&self) -> &str {
        "FPS Logger"
    }

    fn description(&self) -> &str {
        "Log the frame rate while a sample runs"
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
        _args: &mut VecDeque<String>,
        _host: &mut dyn Host,
    ) -> bool {
        true
    }

    fn on_update(&mut self, delta_time: f32, _host: &mut dyn Host) -> Result<()> {
        self.elapsed += delta_time;
        self.frames += 1;
        if self.elapsed >= LOG_INTERVAL {
            let fps = self.frames as f32 / self.elapsed;
            tracing::info!("FPS: {:.1}", fps);
            self.last_rate = Some(fps);
            self.elapsed = 0.0;
            self.frames = 0;
        }
        Ok(())
    }

    fn on_post_draw(
        &mut self,
        context: &mut dyn RenderContext,
        _host: &mut dyn Host,
    ) -> Result<()> {
        self.last_rendered = context.frame_count();
        Ok(())
    }

    fn on_app_close(&mut self, app_id: &str, _host: &mut dyn Host) -> Result<()> {
        tracing::info!("{} rendered {} frames", app_id, self.last_rendered);
        self.elapsed = 0.0;
        self.frames = 0;
        self.last_rendered = 0;
        Ok(())
    }
}
