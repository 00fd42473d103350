// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

/// Logging preferences read from the environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Minimum level that reaches the configured logger
    pub min_log_level: LogLevel,

    /// Whether to emit JSON lines instead of plain text
    pub use_structured_logging: bool,

    /// Whether path resolution misses are reported as debug events
    pub log_resolution_misses: bool,
}

impl LoggingPreferences {
    /// Build preferences from an arbitrary variable lookup.
    ///
    /// Absent or unparseable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            min_log_level: lookup(env_vars::LOG_LEVEL)
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Warning),
            use_structured_logging: lookup(env_vars::STRUCTURED_LOGGING)
                .and_then(|v| parse_bool(&v))
                .unwrap_or(false),
            log_resolution_misses: lookup(env_vars::LOG_RESOLUTION_MISSES)
                .and_then(|v| parse_bool(&v))
                .unwrap_or(false),
        }
    }

    /// Read preferences from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self::from_env()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.trim().to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

/// Parse a boolean flag, accepting `1`/`0`, `yes`/`no` and `on`/`off`
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    pub const LOG_LEVEL: &str = "VOUCHER_LOG_LEVEL";
    pub const STRUCTURED_LOGGING: &str = "VOUCHER_STRUCTURED_LOGGING";
    pub const LOG_RESOLUTION_MISSES: &str = "VOUCHER_LOG_RESOLUTION_MISSES";
}
