//! Logging configuration access
//!
//! Preferences are read from the environment on first use and kept for the
//! life of the process.

use crate::config::constants::LOG_EVENT_BUFFER_SIZE;
use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

type EventsLogLevel = crate::logging::events::LogLevel;

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

pub fn runtime_preferences() -> &'static LoggingPreferences {
    RUNTIME_PREFERENCES.get_or_init(LoggingPreferences::from_env)
}

pub fn get_min_log_level() -> EventsLogLevel {
    runtime_preferences().min_log_level.to_events_log_level()
}

pub fn use_structured_logging() -> bool {
    runtime_preferences().use_structured_logging
}

/// Whether resolution misses should be reported
pub fn log_resolution_misses() -> bool {
    runtime_preferences().log_resolution_misses
}

pub fn get_event_buffer_size() -> usize {
    LOG_EVENT_BUFFER_SIZE
}

/// Check that the fixed limits are usable
pub fn validate_config() -> Result<(), String> {
    if LOG_EVENT_BUFFER_SIZE == 0 {
        return Err("Log event buffer size must be non-zero".to_string());
    }
    Ok(())
}
