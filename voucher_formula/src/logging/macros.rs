//! Logging macros accepting `"key" => Display` context pairs
//!
//! Every macro is a no-op when the global logger is not installed, and the
//! level check happens before any context value is formatted.

// ============================================================================
// ERROR / SUCCESS
// ============================================================================

/// Log an error with a code
#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {{
        if $crate::logging::is_enabled($crate::logging::LogLevel::Error) {
            let event = $crate::logging::LogEvent::error($code, $message)
                $(.with_context($key, &format!("{}", $value)))*;
            $crate::logging::emit(event);
        }
    }};
}

/// Log a success event with a code
#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {{
        if $crate::logging::is_enabled($crate::logging::LogLevel::Info) {
            let event = $crate::logging::LogEvent::success($code, $message)
                $(.with_context($key, &format!("{}", $value)))*;
            $crate::logging::emit(event);
        }
    }};
}

// ============================================================================
// WARNING / INFO / DEBUG
// ============================================================================

/// Log a warning, optionally with a code (`code = ...`)
#[macro_export]
macro_rules! log_warning {
    (code = $code:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {{
        if $crate::logging::is_enabled($crate::logging::LogLevel::Warning) {
            let event = $crate::logging::LogEvent::warning_with_code($code, $message)
                $(.with_context($key, &format!("{}", $value)))*;
            $crate::logging::emit(event);
        }
    }};

    ($message:expr $(, $key:expr => $value:expr)* $(,)?) => {{
        if $crate::logging::is_enabled($crate::logging::LogLevel::Warning) {
            let event = $crate::logging::LogEvent::warning($message)
                $(.with_context($key, &format!("{}", $value)))*;
            $crate::logging::emit(event);
        }
    }};
}

/// Log an informational message
#[macro_export]
macro_rules! log_info {
    ($message:expr $(, $key:expr => $value:expr)* $(,)?) => {{
        if $crate::logging::is_enabled($crate::logging::LogLevel::Info) {
            let event = $crate::logging::LogEvent::info($message)
                $(.with_context($key, &format!("{}", $value)))*;
            $crate::logging::emit(event);
        }
    }};
}

/// Log a debug message, optionally with a code (`code = ...`)
#[macro_export]
macro_rules! log_debug {
    (code = $code:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {{
        if $crate::logging::is_enabled($crate::logging::LogLevel::Debug) {
            let event = $crate::logging::LogEvent::debug_with_code($code, $message)
                $(.with_context($key, &format!("{}", $value)))*;
            $crate::logging::emit(event);
        }
    }};

    ($message:expr $(, $key:expr => $value:expr)* $(,)?) => {{
        if $crate::logging::is_enabled($crate::logging::LogLevel::Debug) {
            let event = $crate::logging::LogEvent::debug($message)
                $(.with_context($key, &format!("{}", $value)))*;
            $crate::logging::emit(event);
        }
    }};
}
