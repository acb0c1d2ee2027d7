//! Command-line dispatch.
//!
//! The first token selects a command; every following token must be an
//! `--option`. Handlers may consume value tokens following their own. The
//! command's trigger runs only once the whole line was accepted.

use std::collections::VecDeque;

use samplehost_core::ExitCode;
use samplehost_plugins::OPTION_PREFIX;

use crate::platform::Platform;

impl Platform {
    /// Hands every token to the plugin that claimed it.
    ///
    /// Returns `Help` for a malformed line (unknown command or option, an
    /// option without the prefix, or a handler refusing its token) and
    /// `Success` once the triggering plugin's trigger has run.
    pub(crate) fn dispatch_arguments(&mut self) -> ExitCode {
        let mut args: VecDeque<String> = self.arguments.iter().cloned().collect();

        let Some(command) = args.pop_front() else {
            return ExitCode::NoSample;
        };
        let Some(trigger) = self.registry.command_owner(&command) else {
            tracing::error!("Command \"{}\" is unknown!", command);
            return ExitCode::Help;
        };
        let plugin = &mut self.plugins[trigger.index()];
        if !plugin.handle_command(&command, &mut args, &mut self.state) {
            tracing::error!(
                "Command \"{}\" advertised by plugin \"{}\" was not handled!",
                command,
                plugin.name()
            );
            return ExitCode::Help;
        }
        self.registry.register_hooks(trigger, plugin.as_ref());

        while let Some(token) = args.pop_front() {
            let Some(option) = token.strip_prefix(OPTION_PREFIX) else {
                tracing::error!(
                    "Option \"{}\" does not start with \"{}\"!",
                    token,
                    OPTION_PREFIX
                );
                return ExitCode::Help;
            };
            let Some(owner) = self.registry.option_owner(option) else {
                tracing::error!("Option \"{}\" is unknown!", token);
                return ExitCode::Help;
            };
            let plugin = &mut self.plugins[owner.index()];
            if !plugin.handle_option(option, &mut args, &mut self.state) {
                tracing::error!(
                    "Option \"{}\" advertised by plugin \"{}\" was not handled!",
                    token,
                    plugin.name()
                );
                return ExitCode::Help;
            }
            self.registry.register_hooks(owner, plugin.as_ref());
        }

        self.plugins[trigger.index()].trigger_command(&mut self.state);
        ExitCode::Success
    }
}
