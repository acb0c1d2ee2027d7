//! Sample that closes itself.

use samplehost_core::{Application, ApplicationContext, Result};

/// Counts down and asks to close once the time is up.
#[derive(Debug)]
pub struct CountdownApp {
    name: String,
    remaining: f32,
    last_whole: u32,
}

impl CountdownApp {
    /// Seconds the catalog sample runs for.
    pub const DEFAULT_SECONDS: f32 = 3.0;

    pub fn new(seconds: f32) -> Self {
        Self {
            name: String::new(),
            remaining: seconds,
            last_whole: seconds.ceil() as u32,
        }
    }

    /// Seconds left before the app asks to close.
    pub fn remaining(&self) -> f32 {
        self.remaining.max(0.0)
    }
}

impl Application for CountdownApp {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn prepare(&mut self, _context: &ApplicationContext<'_>) -> Result<()> {
        tracing::info!("{}: closing in {:.0}s", self.name, self.remaining.ceil());
        Ok(())
    }

    fn update(&mut self, delta_time: f32) -> Result<()> {
        self.remaining -= delta_time;
        let whole = self.remaining().ceil() as u32;
        if whole < self.last_whole {
            self.last_whole = whole;
            tracing::info!("{}: {}", self.name, whole);
        }
        Ok(())
    }

    fn should_close(&self) -> bool {
        self.remaining <= 0.0
    }
}
