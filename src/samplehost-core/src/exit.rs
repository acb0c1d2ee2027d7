//! Exit codes produced by dispatch and by each frame.

use std::fmt;

/// Outcome of a dispatch or run step.
///
/// `Success` keeps the run-loop going; every other value ends it and selects
/// the teardown behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExitCode {
    /// Keep going.
    #[default]
    Success,
    /// Usage was requested or the command line was malformed.
    Help,
    /// Nothing to run.
    NoSample,
    /// A close was requested.
    Close,
    /// Unrecoverable failure.
    FatalError,
}

impl ExitCode {
    /// Returns true for [`ExitCode::Success`].
    #[inline]
    pub fn is_success(self) -> bool {
        self == ExitCode::Success
    }

    /// Process exit status for this code.
    ///
    /// Usage output and requested closes are clean exits.
    pub fn process_status(self) -> i32 {
        match self {
            ExitCode::Success | ExitCode::Help | ExitCode::Close => 0,
            ExitCode::FatalError => 1,
            ExitCode::NoSample => 2,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "success"),
            ExitCode::Help => write!(f, "help"),
            ExitCode::NoSample => write!(f, "no-sample"),
            ExitCode::Close => write!(f, "close"),
            ExitCode::FatalError => write!(f, "fatal-error"),
        }
    }
}
