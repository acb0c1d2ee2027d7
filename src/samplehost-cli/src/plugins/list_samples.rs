//! `samples`: lists the catalog and exits.

use samplehost_plugins::{Flag, Host, Plugin};

use crate::samples::Catalog;

const COMMANDS: &[Flag] = &[Flag::new("samples", "List all samples")];

#[derive(Debug)]
pub struct ListSamples {
    catalog: Catalog,
}

impl ListSamples {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Width of the id column.
    fn id_width(&self) -> usize {
        self.catalog
            .iter()
            .map(|app| app.id.len())
            .max()
            .unwrap_or(0)
    }
}

impl Plugin for ListSamples {
    fn name(&self) -> &str {
        "List Samples"
    }

    fn description(&self) -> &str {
        "List the samples that can be run"
    }

    fn commands(&self) -> &[Flag] {
        COMMANDS
    }

    fn handle_command(
        &mut self,
        _command: &str,
        _args: &mut std::collections::VecDeque<String>,
        _host: &mut dyn Host,
    ) -> bool {
        true
    }

    fn trigger_command(&mut self, host: &mut dyn Host) {
        let width = self.id_width() + 2;
        tracing::info!("");
        tracing::info!("Available samples:");
        tracing::info!("");
        for app in self.catalog.iter() {
            tracing::info!("\t{:<width$}{}", app.id, app.description);
            if !app.tags.is_empty() {
                tracing::info!("\t{:<width$}tags: {}", "", app.tags.join(", "));
            }
        }
        tracing::info!("");
        host.close();
    }
}
