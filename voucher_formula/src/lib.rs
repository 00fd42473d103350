//! # Voucher Formula
//!
//! The formula path language used to describe derived fields on voucher
//! records (`$Parent:Ledger:$PartyLedgerName`), plus the structured logging
//! subsystem and runtime preferences shared by the extractor crates.

// Logging comes first so its macros are in scope for the other modules
#[macro_use]
pub mod logging;

pub mod config;
pub mod grammar;

// Re-export key types for library consumers
pub use config::LoggingPreferences;
pub use grammar::{FormulaError, FormulaPath, Segment};
pub use logging::{Code, LogEvent, LogLevel};
