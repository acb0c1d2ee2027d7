//! Log subscriber setup.

use std::fs::File;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::HostConfig;

/// Installs the global subscriber: stderr always, plus the configured log
/// file.
///
/// Returns the file writer's guard; logs written after it is dropped are
/// lost, so it should live until teardown.
pub fn init(config: &HostConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(config.filter_directive())
        .with_context(|| format!("Invalid log filter \"{}\"", config.filter_directive()))?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::debug!("Logger initialized");
    Ok(guard)
}
