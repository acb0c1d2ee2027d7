//! Sample that fails mid-run.

use samplehost_core::{Application, ApplicationContext, HostError, Result};

/// Runs a few frames, then returns an error from `update`.
#[derive(Debug)]
pub struct UnstableApp {
    name: String,
    updates: usize,
    fail_on: usize,
}

impl UnstableApp {
    /// Update (1-based, the warm start included) the catalog sample fails on.
    pub const FAILING_UPDATE: usize = 3;

    pub fn new(fail_on: usize) -> Self {
        Self {
            name: String::new(),
            updates: 0,
            fail_on,
        }
    }
}

impl Application for UnstableApp {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn prepare(&mut self, _context: &ApplicationContext<'_>) -> Result<()> {
        Ok(())
    }

    fn update(&mut self, _delta_time: f32) -> Result<()> {
        self.updates += 1;
        if self.updates >= self.fail_on {
            return Err(HostError::application(
                &self.name,
                format!("lost its device on update {}", self.updates),
            ));
        }
        Ok(())
    }
}
