//! Global logging module for the extractor crates
//!
//! Provides a process-wide logging service installed at most once, a
//! per-thread record context for batch work, and the `log_*!` macros.
//! Nothing is emitted until a service is installed.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::cell::RefCell;
use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
#[cfg(feature = "logging")]
pub use service::LogFacadeLogger;
pub use service::{Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

/// Identifies the record being processed on the current thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordContext {
    pub record_index: usize,
    pub label: Option<String>,
}

impl RecordContext {
    pub fn new(record_index: usize) -> Self {
        Self {
            record_index,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

thread_local! {
    static RECORD_CONTEXT: RefCell<Option<RecordContext>> = const { RefCell::new(None) };
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Install a specific logging service
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Whether an event at `level` would reach the installed logger
pub fn is_enabled(level: LogLevel) -> bool {
    try_get_global_logger()
        .map(|logger| logger.should_log(level))
        .unwrap_or(false)
}

// ============================================================================
// RECORD CONTEXT MANAGEMENT
// ============================================================================

pub fn set_record_context(context: RecordContext) {
    RECORD_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = Some(context);
    });
}

pub fn clear_record_context() {
    RECORD_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = None;
    });
}

pub fn get_current_record_context() -> Option<RecordContext> {
    RECORD_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Run `f` with a record context set, restoring the previous one afterwards
pub fn with_record_context<F, R>(context: RecordContext, f: F) -> R
where
    F: FnOnce() -> R,
{
    let previous = RECORD_CONTEXT.with(|ctx| ctx.borrow_mut().replace(context));
    let result = f();
    RECORD_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = previous;
    });
    result
}

// ============================================================================
// MACRO SUPPORT
// ============================================================================

/// Attach the record context and hand the event to the global logger
pub fn emit(event: LogEvent) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    let event = match get_current_record_context() {
        Some(ctx) => {
            let event = event.with_context("record", &ctx.record_index.to_string());
            match &ctx.label {
                Some(label) => event.with_context("record_label", label),
                None => event,
            }
        }
        None => event,
    };

    logger.log_event(event);
}

/// Error logging that falls back to stderr when uninitialized
pub fn safe_log_error(code: Code, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_event(LogEvent::error(code, message));
    } else {
        eprintln!("[ERROR] FALLBACK: [{}] {}", code.as_str(), message);
    }
}
