//! `--force-close`: exit without waiting for the user.

use std::collections::VecDeque;

use samplehost_plugins::{Flag, Host, Plugin};

const OPTIONS: &[Flag] = &[Flag::new(
    "force-close",
    "Exit immediately on failure instead of waiting for a key press",
)];

/// Suppresses the pause before an unsuccessful exit.
#[derive(Debug, Default)]
pub struct ForceClose;

impl Plugin for ForceClose {
    fn name(&self) -> &str {
        "Force Close"
    }

    fn options(&self) -> &[Flag] {
        OPTIONS
    }

    fn handle_option(
        &mut self,
        _option: &str,
        _args: &mut VecDeque<String>,
        _host: &mut dyn Host,
    ) -> bool {
        true
    }

    fn suppresses_exit_pause(&self) -> bool {
        true
    }
}
