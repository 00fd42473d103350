//! Configuration for the extractor crates
//!
//! Fixed limits live in [`constants`]; user preferences are read from the
//! environment in [`runtime`].

pub mod constants;
pub mod runtime;

pub use runtime::{env_vars, parse_bool, parse_log_level, LoggingPreferences};
