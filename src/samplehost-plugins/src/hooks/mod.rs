//! Lifecycle hooks plugins can subscribe to.
//!
//! A plugin lists the hooks it wants in [`Plugin::hooks`](crate::Plugin::hooks).
//! Subscriptions are recorded in the [`HookRegistry`] only once the plugin is
//! in use, i.e. it handled a command or option. The [`HookDispatcher`] then
//! calls every subscriber of a hook in the order it subscribed.

mod dispatcher;
mod registry;
mod types;

pub use dispatcher::HookDispatcher;
pub use registry::HookRegistry;
pub use types::Hook;
