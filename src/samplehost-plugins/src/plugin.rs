//! Core plugin trait and types.

use std::collections::VecDeque;
use std::fmt;

use samplehost_core::{Drawer, RenderContext, Result};

use crate::OPTION_PREFIX;
use crate::hooks::Hook;
use crate::host::Host;

/// Identifies a plugin by its registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PluginId(pub(crate) usize);

impl PluginId {
    /// Position of the plugin in the list it was registered from.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PluginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A command or option a plugin claims, with its help text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag {
    /// Token as typed (options without the `--` prefix).
    pub name: &'static str,
    /// One-line help text.
    pub help: &'static str,
}

impl Flag {
    /// Creates a flag.
    pub const fn new(name: &'static str, help: &'static str) -> Self {
        Self { name, help }
    }
}

/// A unit of pluggable host behaviour.
///
/// Every method has a default so a plugin only implements what it declares.
/// Handlers receive the matched token name and the remaining argument queue;
/// they may pop value tokens that belong to them.
pub trait Plugin {
    /// Plugin name, used in logs and conflict reports.
    fn name(&self) -> &str;

    /// One-line description.
    fn description(&self) -> &str {
        ""
    }

    /// Commands this plugin claims.
    fn commands(&self) -> &[Flag] {
        &[]
    }

    /// Options this plugin claims.
    fn options(&self) -> &[Flag] {
        &[]
    }

    /// Hooks this plugin wants to receive once it is in use.
    fn hooks(&self) -> &[Hook] {
        &[]
    }

    /// Handles `command`. Returns false when the command could not be handled.
    fn handle_command(
        &mut self,
        _command: &str,
        _args: &mut VecDeque<String>,
        _host: &mut dyn Host,
    ) -> bool {
        false
    }

    /// Handles `--option`. Returns false when the option could not be handled.
    fn handle_option(
        &mut self,
        _option: &str,
        _args: &mut VecDeque<String>,
        _host: &mut dyn Host,
    ) -> bool {
        false
    }

    /// Runs once every option has been handled, on the plugin whose command
    /// started the run.
    fn trigger_command(&mut self, _host: &mut dyn Host) {}

    /// True when this plugin, once in use, suppresses the interactive pause
    /// some platforms insert before exiting unsuccessfully.
    fn suppresses_exit_pause(&self) -> bool {
        false
    }

    /// Logs this plugin's commands and options, names padded to `width`.
    fn log_help(&self, width: usize) {
        for command in self.commands() {
            tracing::info!("\t\t\t{:<width$}{}", command.name, command.help);
        }
        for option in self.options() {
            let token = format!("{OPTION_PREFIX}{}", option.name);
            tracing::info!("\t\t\t{:<width$}{}", token, option.help);
        }
    }

    // Hook callbacks. Only called for hooks listed in `hooks()`.

    fn on_post_draw(
        &mut self,
        _context: &mut dyn RenderContext,
        _host: &mut dyn Host,
    ) -> Result<()> {
        Ok(())
    }

    fn on_app_error(&mut self, _app_id: &str, _host: &mut dyn Host) -> Result<()> {
        Ok(())
    }

    fn on_update(&mut self, _delta_time: f32, _host: &mut dyn Host) -> Result<()> {
        Ok(())
    }

    fn on_app_start(&mut self, _app_id: &str, _host: &mut dyn Host) -> Result<()> {
        Ok(())
    }

    fn on_app_close(&mut self, _app_id: &str, _host: &mut dyn Host) -> Result<()> {
        Ok(())
    }

    fn on_platform_close(&mut self, _host: &mut dyn Host) -> Result<()> {
        Ok(())
    }

    fn on_update_ui_overlay(
        &mut self,
        _drawer: &mut dyn Drawer,
        _host: &mut dyn Host,
    ) -> Result<()> {
        Ok(())
    }
}
