//! Frame timer.

use std::time::{Duration, Instant};

/// Measures time between frames and the lifetime of an application.
#[derive(Debug, Clone, Default)]
pub struct Timer {
    start: Option<Instant>,
    last_tick: Option<Instant>,
}

impl Timer {
    /// Creates a stopped timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) the timer.
    pub fn start(&mut self) {
        let now = Instant::now();
        self.start = Some(now);
        self.last_tick = Some(now);
    }

    /// Returns the time since the previous tick and marks a new one.
    ///
    /// A stopped timer is started and reports zero.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let delta = match self.last_tick {
            Some(last) => now.duration_since(last),
            None => {
                self.start = Some(now);
                Duration::ZERO
            }
        };
        self.last_tick = Some(now);
        delta
    }

    /// Stops the timer and returns the total time since it started.
    pub fn stop(&mut self) -> Duration {
        let total = self.elapsed();
        self.start = None;
        self.last_tick = None;
        total
    }

    /// Time since the timer started, zero when stopped.
    pub fn elapsed(&self) -> Duration {
        self.start.map(|start| start.elapsed()).unwrap_or_default()
    }

    /// Returns true while the timer is running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.start.is_some()
    }
}
