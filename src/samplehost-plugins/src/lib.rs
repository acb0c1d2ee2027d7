//! # samplehost plugin system
//!
//! Plugins extend the host without the host knowing about them in advance.
//! Each plugin declares:
//!
//! - **Commands**: the leading command-line token that selects what a run does
//!   (`sample hello`, `samples`)
//! - **Options**: `--name` tokens refining the command (`--headless`)
//! - **Hooks**: lifecycle events it wants to observe (per-frame update,
//!   application start/close/error, platform close, ...)
//!
//! The [`PluginRegistry`] builds the command, option and hook tables and
//! detects conflicting claims; the [`HookDispatcher`] multicasts lifecycle
//! events to subscribers in registration order.
//!
//! ## Example
//!
//! ```rust,ignore
//! use samplehost_plugins::{Flag, Hook, Host, Plugin};
//!
//! struct Quiet;
//!
//! impl Plugin for Quiet {
//!     fn name(&self) -> &str { "quiet" }
//!     fn options(&self) -> &[Flag] { &[Flag::new("quiet", "Suppress the frame log")] }
//!     fn hooks(&self) -> &[Hook] { &[Hook::OnUpdate] }
//!     fn handle_option(&mut self, _: &str, _: &mut VecDeque<String>, _: &mut dyn Host) -> bool {
//!         true
//!     }
//! }
//! ```

pub mod hooks;
pub mod host;
pub mod plugin;
pub mod registry;

pub use hooks::{Hook, HookDispatcher, HookRegistry};
pub use host::Host;
pub use plugin::{Flag, Plugin, PluginId};
pub use registry::{ConflictKind, PluginRegistry, RegistrationConflict};

/// Prefix every option token must carry on the command line.
pub const OPTION_PREFIX: &str = "--";
