//! `--benchmark`: fixed-step simulation with input disabled.

use std::collections::VecDeque;
use std::time::Instant;

use samplehost_core::Result;
use samplehost_plugins::{Flag, Hook, Host, Plugin};

const OPTIONS: &[Flag] = &[Flag::new(
    "benchmark",
    "Run at a fixed 60 FPS step, ignore input and report the frame rate",
)];
const HOOKS: &[Hook] = &[Hook::OnAppStart, Hook::OnUpdate, Hook::OnAppClose];

/// Simulation rate the benchmark pins updates to.
pub const BENCHMARK_FPS: f32 = 60.0;

#[derive(Debug, Default)]
pub struct BenchmarkMode {
    started: Option<Instant>,
    frames: u64,
}

impl BenchmarkMode {
    /// Frames counted since the current app started.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Plugin for BenchmarkMode {
    fn name(&self) -> &str {
        "Benchmark Mode"
    }

    fn description(&self) -> &str {
        "Run samples in a reproducible benchmark configuration"
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
        host: &mut dyn Host,
    ) -> bool {
        host.force_simulation_fps(BENCHMARK_FPS);
        host.force_render(true);
        host.disable_input_processing();
        true
    }

    fn on_app_start(&mut self, app_id: &str, _host: &mut dyn Host) -> Result<()> {
        tracing::info!("Benchmarking {}", app_id);
        self.started = Some(Instant::now());
        self.frames = 0;
        Ok(())
    }

    fn on_update(&mut self, _delta_time: f32, _host: &mut dyn Host) -> Result<()> {
        self.frames += 1;
        Ok(())
    }

    fn on_app_close(&mut self, app_id: &str, _host: &mut dyn Host) -> Result<()> {
        let Some(started) = self.started.take() else {
            return Ok(());
        };
        let seconds = started.elapsed().as_secs_f32();
        let fps = if seconds > 0.0 {
            self.frames as f32 / seconds
        } else {
            0.0
        };
        tracing::info!(
            "Benchmark of {} finished: {} frames, {:.2}s simulated in {:.2}s ({:.1} FPS)",
            app_id,
            self.frames,
            self.frames as f32 / BENCHMARK_FPS,
            seconds,
            fps
        );
        Ok(())
    }
}
