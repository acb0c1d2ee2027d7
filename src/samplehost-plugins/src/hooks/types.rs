//! Hook kinds.

use std::fmt;

/// Lifecycle events observable by plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Hook {
    /// After the active application rendered a frame.
    PostDraw,
    /// The active application failed during a frame.
    OnAppError,
    /// Start of every frame, before the application updates.
    OnUpdate,
    /// A new application became active.
    OnAppStart,
    /// The active application asked to close.
    OnAppClose,
    /// The platform is shutting down.
    OnPlatformClose,
    /// The active application is drawing its overlay.
    OnUpdateUiOverlay,
}

impl Hook {
    /// Every hook kind, in declaration order.
    pub const ALL: [Hook; 7] = [
        Hook::PostDraw,
        Hook::OnAppError,
        Hook::OnUpdate,
        Hook::OnAppStart,
        Hook::OnAppClose,
        Hook::OnPlatformClose,
        Hook::OnUpdateUiOverlay,
    ];

    /// Dense index used for per-hook tables.
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PostDraw => write!(f, "post_draw"),
            Self::OnAppError => write!(f, "on_app_error"),
            Self::OnUpdate => write!(f, "on_update"),
            Self::OnAppStart => write!(f, "on_app_start"),
            Self::OnAppClose => write!(f, "on_app_close"),
            Self::OnPlatformClose => write!(f, "on_platform_close"),
            Self::OnUpdateUiOverlay => write!(f, "on_update_ui_overlay"),
        }
    }
}
