//! # Voucher Extractor SDK
//!
//! Command-line front end for voucher field extraction: file loading
//! (JSON or TOML), the `extract`, `batch`, `validate` and `resolve`
//! commands, and the JSON report they print.

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod report;

pub use cli::{Cli, Command};
pub use commands::{execute, CommandOutcome};
pub use error::{CliError, Result};

use std::sync::Arc;
use voucher_formula::logging::{
    self, codes, LogFacadeLogger, LogLevel, Logger, LoggingService, StructuredLogger,
};
use voucher_formula::{log_success, LoggingPreferences};

/// Where structured events are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    /// JSON lines on stderr
    Structured,
    /// The `log` facade, filtered again by `RUST_LOG`
    Facade,
}

impl LogOutput {
    pub fn for_preferences(preferences: &LoggingPreferences) -> Self {
        if preferences.use_structured_logging {
            LogOutput::Structured
        } else {
            LogOutput::Facade
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogOutput::Structured => "structured",
            LogOutput::Facade => "facade",
        }
    }

    pub fn logger(self, min_level: LogLevel) -> Arc<dyn Logger> {
        match self {
            LogOutput::Structured => Arc::new(StructuredLogger::new(min_level)),
            LogOutput::Facade => Arc::new(LogFacadeLogger::default()),
        }
    }
}

/// Install the global logging service from `VOUCHER_*` preferences
pub fn install_logging() -> std::result::Result<(), String> {
    logging::config::validate_config()
        .map_err(|e| format!("Configuration validation failed: {}", e))?;

    let preferences = logging::config::runtime_preferences();
    let min_level = preferences.min_log_level.to_events_log_level();
    let output = LogOutput::for_preferences(preferences);

    let service = LoggingService::new(output.logger(min_level), min_level);
    logging::init_global_logging_with_service(Arc::new(service))?;

    log_success!(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Logging initialized",
        "output" => output.as_str()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preferences(pairs: &[(&str, &str)]) -> LoggingPreferences {
        let owned: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LoggingPreferences::from_lookup(move |name| {
            owned
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        })
    }

    #[test]
    fn test_structured_preference_selects_json_lines() {
        let prefs = preferences(&[("VOUCHER_STRUCTURED_LOGGING", "true")]);
        assert_eq!(LogOutput::for_preferences(&prefs), LogOutput::Structured);
    }

    #[test]
    fn test_default_output_is_log_facade() {
        let prefs = preferences(&[]);
        assert_eq!(LogOutput::for_preferences(&prefs), LogOutput::Facade);

        let off = preferences(&[("VOUCHER_STRUCTURED_LOGGING", "false")]);
        assert_eq!(LogOutput::for_preferences(&off), LogOutput::Facade);
    }

    #[test]
    fn test_install_logging_is_once_per_process() {
        assert!(install_logging().is_ok());
        assert!(logging::is_initialized());
        assert!(install_logging().is_err());
    }
}
