//! Environment configuration.
//!
//! | Variable                 | Meaning                                         |
//! |--------------------------|-------------------------------------------------|
//! | `SAMPLEHOST_LOG_LEVEL`   | error, warn, info (default), debug or trace     |
//! | `SAMPLEHOST_LOG_FILE`    | also write logs to this file                    |
//! | `SAMPLEHOST_WINDOW_MODE` | default, headless, fullscreen, borderless, stretch |
//!
//! `RUST_LOG`, when set, takes precedence over `SAMPLEHOST_LOG_LEVEL`.

use std::path::PathBuf;

use samplehost_core::{OptionalWindowProperties, WindowMode};

pub const LOG_LEVEL_VAR: &str = "SAMPLEHOST_LOG_LEVEL";
pub const LOG_FILE_VAR: &str = "SAMPLEHOST_LOG_FILE";
pub const WINDOW_MODE_VAR: &str = "SAMPLEHOST_WINDOW_MODE";

/// Log verbosity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors
    Warn,
    /// Show informational messages, warnings, and errors (default)
    #[default]
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Settings read from the environment before the platform starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostConfig {
    pub log_level: LogLevel,
    /// Filter directive from `RUST_LOG`, used verbatim when present.
    pub rust_log: Option<String>,
    pub log_file: Option<PathBuf>,
    pub window_mode: Option<WindowMode>,
}

impl HostConfig {
    /// Reads the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`; unknown values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(value) => LogLevel::from_str_loose(&value).unwrap_or_else(|| {
                eprintln!("Ignoring unknown {LOG_LEVEL_VAR} value \"{value}\"");
                LogLevel::default()
            }),
            None => LogLevel::default(),
        };

        let window_mode = lookup(WINDOW_MODE_VAR).and_then(|value| {
            let mode = WindowMode::from_str_loose(&value);
            if mode.is_none() {
                eprintln!("Ignoring unknown {WINDOW_MODE_VAR} value \"{value}\"");
            }
            mode
        });

        Self {
            log_level,
            rust_log: lookup("RUST_LOG").filter(|value| !value.is_empty()),
            log_file: lookup(LOG_FILE_VAR)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            window_mode,
        }
    }

    /// Filter directive for the log subscriber.
    pub fn filter_directive(&self) -> String {
        match &self.rust_log {
            Some(directive) => directive.clone(),
            None => self.log_level.as_filter_str().to_string(),
        }
    }

    /// Window properties the environment seeds before the command line is
    /// parsed.
    pub fn window_overrides(&self) -> OptionalWindowProperties {
        OptionalWindowProperties {
            title: Some("samplehost".to_string()),
            mode: self.window_mode,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> HostConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.filter_directive(), "info");
        assert_eq!(config.log_file, None);
        assert_eq!(config.window_mode, None);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(config(&[(LOG_LEVEL_VAR, "WARNING")]).log_level, LogLevel::Warn);
        assert_eq!(config(&[(LOG_LEVEL_VAR, "nonsense")]).log_level, LogLevel::Info);
    }

    #[test]
    fn test_rust_log_takes_precedence() {
        let config = config(&[(LOG_LEVEL_VAR, "trace"), ("RUST_LOG", "samplehost=debug")]);
        assert_eq!(config.filter_directive(), "samplehost=debug");
    }

    #[test]
    fn test_window_mode() {
        let config = config(&[(WINDOW_MODE_VAR, "Headless"), (LOG_FILE_VAR, "/tmp/host.log")]);
        assert_eq!(config.window_mode, Some(WindowMode::Headless));
        assert_eq!(config.window_overrides().mode, Some(WindowMode::Headless));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/host.log")));
    }
}
