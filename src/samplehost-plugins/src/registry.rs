//! Plugin registry building the command, option and hook tables.
//!
//! Commands and options are claimed at registration time and the first claim
//! wins. Hooks are only subscribed once a plugin is actually used, so that an
//! idle plugin never sees lifecycle events.

use std::collections::HashMap;
use std::fmt;

use crate::hooks::HookRegistry;
use crate::plugin::{Plugin, PluginId};

/// Which table a conflicting claim was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    Command,
    Option,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command => write!(f, "command"),
            Self::Option => write!(f, "option"),
        }
    }
}

/// A command or option claimed by a second plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationConflict {
    pub kind: ConflictKind,
    pub name: String,
    /// Plugin whose claim was rejected.
    pub rejected: PluginId,
    /// Plugin that keeps the claim.
    pub owner: PluginId,
}

/// Command, option and hook tables for a set of plugins.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    names: Vec<String>,
    commands: HashMap<String, PluginId>,
    options: HashMap<String, PluginId>,
    hooks: HookRegistry,
    active: Vec<PluginId>,
    conflicts: Vec<RegistrationConflict>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from `plugins`; ids follow list order.
    pub fn from_plugins(plugins: &[Box<dyn Plugin>]) -> Self {
        let mut registry = Self::new();
        for plugin in plugins {
            registry.register(plugin.as_ref());
        }
        registry
    }

    /// Registers the commands and options of `plugin`.
    ///
    /// A command or option already claimed by an earlier plugin stays with
    /// that plugin; the conflict is logged and recorded.
    pub fn register(&mut self, plugin: &dyn Plugin) -> PluginId {
        let id = PluginId(self.names.len());
        self.names.push(plugin.name().to_string());

        for command in plugin.commands() {
            self.claim(ConflictKind::Command, command.name, id);
        }
        for option in plugin.options() {
            self.claim(ConflictKind::Option, option.name, id);
        }

        tracing::debug!(
            "Registered plugin {} as {} ({} commands, {} options)",
            plugin.name(),
            id,
            plugin.commands().len(),
            plugin.options().len()
        );
        id
    }

    fn claim(&mut self, kind: ConflictKind, name: &str, id: PluginId) {
        let table = match kind {
            ConflictKind::Command => &mut self.commands,
            ConflictKind::Option => &mut self.options,
        };
        match table.get(name) {
            Some(&owner) => {
                tracing::error!(
                    "Plugin {} tried to register {} '{}' already owned by {}",
                    self.names[id.index()],
                    kind,
                    name,
                    self.names[owner.index()]
                );
                self.conflicts.push(RegistrationConflict {
                    kind,
                    name: name.to_string(),
                    rejected: id,
                    owner,
                });
            }
            None => {
                table.insert(name.to_string(), id);
            }
        }
    }

    /// Subscribes `plugin` to every hook it declares and marks it active.
    ///
    /// Calling this again for the same plugin changes nothing.
    pub fn register_hooks(&mut self, id: PluginId, plugin: &dyn Plugin) {
        if self.active.contains(&id) {
            return;
        }
        for &hook in plugin.hooks() {
            self.hooks.subscribe(hook, id);
        }
        self.active.push(id);
    }

    /// Plugin owning `command`.
    pub fn command_owner(&self, command: &str) -> Option<PluginId> {
        self.commands.get(command).copied()
    }

    /// Plugin owning `option` (without the `--` prefix).
    pub fn option_owner(&self, option: &str) -> Option<PluginId> {
        self.options.get(option).copied()
    }

    /// Hook subscriptions of active plugins.
    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    /// Plugins that handled a command or option, in activation order.
    pub fn active_plugins(&self) -> &[PluginId] {
        &self.active
    }

    /// Returns true once `id` handled a command or option.
    pub fn is_active(&self, id: PluginId) -> bool {
        self.active.contains(&id)
    }

    /// Every rejected claim, in registration order.
    pub fn conflicts(&self) -> &[RegistrationConflict] {
        &self.conflicts
    }

    /// Name `id` was registered under.
    pub fn plugin_name(&self, id: PluginId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// Number of registered plugins.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no plugin is registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
