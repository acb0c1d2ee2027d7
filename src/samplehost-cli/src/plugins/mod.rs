//! Built-in plugins.
//!
//! Commands select what a run does, options refine it, and hooks let a
//! plugin follow the run-loop once one of its tokens was used.

mod benchmark_mode;
mod force_close;
mod fps_logger;
mod list_samples;
mod start_sample;
mod stop_after;
mod window_options;

pub use benchmark_mode::BenchmarkMode;
pub use force_close::ForceClose;
pub use fps_logger::FpsLogger;
pub use list_samples::ListSamples;
pub use start_sample::StartSample;
pub use stop_after::StopAfter;
pub use window_options::WindowOptions;

use samplehost_plugins::Plugin;

use crate::samples::Catalog;

/// Every built-in plugin, in registration order.
pub fn builtin(catalog: &Catalog) -> Vec<Box<dyn Plugin>> {
    vec![
        Box::new(StartSample::new(catalog.clone())),
        Box::new(ListSamples::new(catalog.clone())),
        Box::new(WindowOptions::default()),
        Box::new(StopAfter::default()),
        Box::new(BenchmarkMode::default()),
        Box::new(FpsLogger::default()),
        Box::new(ForceClose),
    ]
}

/// Parses the value token following an option, consuming it only when it
/// is a value and not the next option.
pub(crate) fn take_value<T: std::str::FromStr>(
    args: &mut std::collections::VecDeque<String>,
) -> Option<T> {
    let value = args
        .front()
        .filter(|token| !token.starts_with(samplehost_plugins::OPTION_PREFIX))?
        .parse::<T>()
        .ok()?;
    args.pop_front();
    Some(value)
}
