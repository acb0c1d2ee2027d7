//! samplehost binary support.
//!
//! Wires the built-in samples and plugins into a [`Platform`]:
//!
//! - `config` - environment configuration (log level, log file, window mode)
//! - `logging` - tracing subscriber setup
//! - `plugins` - built-in commands, options and hook observers
//! - `samples` - the sample catalog
//! - Terminal restoration on panic

use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use samplehost_core::{ExitCode, WindowFactory};
use samplehost_platform::{Platform, create_window};
use tracing_appender::non_blocking::WorkerGuard;

pub mod config;
pub mod logging;
pub mod plugins;
pub mod samples;

use config::HostConfig;

static PANIC_HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Install a panic hook that restores the terminal before the panic message
/// is printed, so a panicking sample does not leave the shell in raw mode.
pub fn install_panic_hook() {
    if PANIC_HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));
}

/// Leave raw mode and the alternate screen and show the cursor again.
pub fn restore_terminal() {
    use crossterm::cursor::Show;
    use crossterm::event::DisableMouseCapture;
    use crossterm::execute;
    use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};

    let _ = disable_raw_mode();
    let _ = execute!(
        std::io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        Show
    );
}

/// Runs `arguments` (without the program name) with the real window
/// backends.
pub fn run(
    arguments: Vec<String>,
    config: &HostConfig,
    log_guard: Option<WorkerGuard>,
) -> ExitCode {
    run_with(arguments, config, Box::new(create_window), log_guard)
}

/// Runs `arguments` with windows created by `window_factory`.
///
/// Initializes the platform, runs the main loop when a sample was started
/// and always tears down before returning the final code.
pub fn run_with(
    arguments: Vec<String>,
    config: &HostConfig,
    window_factory: Box<dyn WindowFactory>,
    log_guard: Option<WorkerGuard>,
) -> ExitCode {
    let catalog = samples::catalog();
    let mut platform = Platform::new(arguments, window_factory)
        .with_window_properties(&config.window_overrides());
    if let Some(guard) = log_guard {
        platform.set_log_guard(guard);
    }

    let mut code = platform.initialize(plugins::builtin(&catalog));
    if code.is_success() {
        code = platform.main_loop();
    }
    if code == ExitCode::FatalError {
        if let Some(error) = platform.last_error() {
            tracing::error!("Fatal error: {}", error);
        }
    }

    platform.terminate(code);
    code
}
