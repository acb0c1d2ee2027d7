//! Per-hook subscriber lists.

use super::types::Hook;
use crate::plugin::PluginId;

/// Maps every hook kind to the plugins subscribed to it, in subscription
/// order.
#[derive(Debug, Clone, Default)]
pub struct HookRegistry {
    subscribers: [Vec<PluginId>; Hook::ALL.len()],
}

impl HookRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes `plugin` to `hook`. Returns false if it already was.
    pub fn subscribe(&mut self, hook: Hook, plugin: PluginId) -> bool {
        let list = &mut self.subscribers[hook.index()];
        if list.contains(&plugin) {
            return false;
        }
        list.push(plugin);
        true
    }

    /// Plugins subscribed to `hook`, in subscription order.
    pub fn subscribers(&self, hook: Hook) -> &[PluginId] {
        &self.subscribers[hook.index()]
    }

    /// Returns true if `plugin` is subscribed to `hook`.
    pub fn is_subscribed(&self, hook: Hook, plugin: PluginId) -> bool {
        self.subscribers(hook).contains(&plugin)
    }

    /// Total number of subscriptions across all hooks.
    pub fn len(&self) -> usize {
        self.subscribers.iter().map(Vec::len).sum()
    }

    /// Returns true if nothing is subscribed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
