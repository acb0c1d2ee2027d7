//! Error types for host operations.

use thiserror::Error;

/// Errors raised by applications, plugins and windows.
///
/// Every fallible collaborator call in the host returns this type. The
/// run-loop catches it at the frame boundary and decides whether the failure
/// is recoverable.
#[derive(Error, Debug)]
pub enum HostError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Window operation failed.
    #[error("Window error: {0}")]
    Window(String),

    /// An operation needed a window but none has been created.
    #[error("No window has been created")]
    NoWindow,

    /// Application failed to create, prepare or update.
    #[error("Application '{app}' failed: {message}")]
    Application { app: String, message: String },

    /// A plugin callback failed.
    #[error("Plugin '{plugin}' failed: {message}")]
    Plugin { plugin: String, message: String },
}

impl HostError {
    /// Create a window error.
    pub fn window(message: impl Into<String>) -> Self {
        Self::Window(message.into())
    }

    /// Create an application error.
    pub fn application(app: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Application {
            app: app.into(),
            message: message.into(),
        }
    }

    /// Create a plugin error.
    pub fn plugin(plugin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Plugin {
            plugin: plugin.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for host operations.
pub type Result<T> = std::result::Result<T, HostError>;
