//! `sample <id>`: runs one sample.

use std::collections::VecDeque;

use samplehost_plugins::{Flag, Host, OPTION_PREFIX, Plugin};

use crate::samples::Catalog;

const COMMANDS: &[Flag] = &[Flag::new("sample", "Run a specific sample: sample <id>")];

/// Requests the sample named on the command line.
#[derive(Debug)]
pub struct StartSample {
    catalog: Catalog,
    selected: Option<String>,
}

impl StartSample {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selected: None,
        }
    }
}

impl Plugin for StartSample {
    fn name(&self) -> &str {
        "Start Sample"
    }

    fn description(&self) -> &str {
        "Run a single sample by id"
    }

    fn commands(&self) -> &[Flag] {
        COMMANDS
    }

    fn handle_command(
        &mut self,
        _command: &str,
        args: &mut VecDeque<String>,
        _host: &mut dyn Host,
    ) -> bool {
        match args.front() {
            Some(id) if !id.starts_with(OPTION_PREFIX) => {
                self.selected = args.pop_front();
                true
            }
            _ => {
                tracing::error!("Command \"sample\" expects a sample id");
                false
            }
        }
    }

    fn trigger_command(&mut self, host: &mut dyn Host) {
        let Some(id) = self.selected.as_deref() else {
            return;
        };
        match self.catalog.find(id) {
            Some(info) => host.request_application(info.clone()),
            None => {
                tracing::error!("Sample \"{}\" does not exist", id);
                let known: Vec<&str> = self.catalog.iter().map(|app| app.id.as_str()).collect();
                tracing::info!("Available samples: {}", known.join(", "));
            }
        }
    }
}
