//! Hook dispatcher multicasting lifecycle events to subscribed plugins.

use samplehost_core::{Drawer, RenderContext, Result};

use super::registry::HookRegistry;
use super::types::Hook;
use crate::host::Host;
use crate::plugin::Plugin;

/// Calls every subscriber of a hook in subscription order.
///
/// Borrows the hook table, the plugin list and the host for the duration of
/// one dispatch so that callbacks may steer the host while the platform keeps
/// ownership of all three.
pub struct HookDispatcher<'a> {
    hooks: &'a HookRegistry,
    plugins: &'a mut [Box<dyn Plugin>],
    host: &'a mut dyn Host,
}

impl<'a> HookDispatcher<'a> {
    /// Creates a dispatcher over `plugins`, indexed by [`PluginId`](crate::PluginId).
    pub fn new(
        hooks: &'a HookRegistry,
        plugins: &'a mut [Box<dyn Plugin>],
        host: &'a mut dyn Host,
    ) -> Self {
        Self {
            hooks,
            plugins,
            host,
        }
    }

    /// Runs `call` for every subscriber of `hook`.
    ///
    /// Stops at the first callback error and returns it. A hook without
    /// subscribers does nothing.
    pub fn fire<F>(&mut self, hook: Hook, mut call: F) -> Result<()>
    where
        F: FnMut(&mut dyn Plugin, &mut dyn Host) -> Result<()>,
    {
        let hooks = self.hooks;
        for id in hooks.subscribers(hook) {
            let Some(plugin) = self.plugins.get_mut(id.index()) else {
                tracing::warn!("Hook {} subscriber {} is not loaded", hook, id);
                continue;
            };
            if let Err(e) = call(plugin.as_mut(), &mut *self.host) {
                tracing::debug!("Plugin {} failed in {}: {}", plugin.name(), hook, e);
                return Err(e);
            }
        }
        Ok(())
    }

    pub fn on_post_draw(&mut self, context: &mut dyn RenderContext) -> Result<()> {
        self.fire(Hook::PostDraw, |plugin, host| {
            plugin.on_post_draw(&mut *context, host)
        })
    }

    pub fn on_app_error(&mut self, app_id: &str) -> Result<()> {
        self.fire(Hook::OnAppError, |plugin, host| {
            plugin.on_app_error(app_id, host)
        })
    }

    pub fn on_update(&mut self, delta_time: f32) -> Result<()> {
        self.fire(Hook::OnUpdate, |plugin, host| {
            plugin.on_update(delta_time, host)
        })
    }

    pub fn on_app_start(&mut self, app_id: &str) -> Result<()> {
        self.fire(Hook::OnAppStart, |plugin, host| {
            plugin.on_app_start(app_id, host)
        })
    }

    pub fn on_app_close(&mut self, app_id: &str) -> Result<()> {
        self.fire(Hook::OnAppClose, |plugin, host| {
            plugin.on_app_close(app_id, host)
        })
    }

    pub fn on_platform_close(&mut self) -> Result<()> {
        self.fire(Hook::OnPlatformClose, |plugin, host| {
            plugin.on_platform_close(host)
        })
    }

    pub fn on_update_ui_overlay(&mut self, drawer: &mut dyn Drawer) -> Result<()> {
        self.fire(Hook::OnUpdateUiOverlay, |plugin, host| {
            plugin.on_update_ui_overlay(&mut *drawer, host)
        })
    }
}
