//! Command implementations
//!
//! Each command loads its inputs, runs the library, and returns the report
//! payload along with whether the run counts as a success for the exit code.

pub mod batch;
pub mod extract;
pub mod resolve;
pub mod validate;

pub use batch::execute_batch;
pub use extract::execute_extract;
pub use resolve::execute_resolve;
pub use validate::execute_validate;

use crate::cli::Command;
use crate::error::Result;
use crate::report::build_report;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    pub report: Value,
    pub success: bool,
}

impl CommandOutcome {
    pub(crate) fn new(command: &str, payload: Map<String, Value>, success: bool) -> Self {
        Self {
            report: build_report(command, payload),
            success,
        }
    }
}

pub fn execute(command: &Command) -> Result<CommandOutcome> {
    match command {
        Command::Extract(args) => execute_extract(args),
        Command::Batch(args) => execute_batch(args),
        Command::Validate(args) => execute_validate(args),
        Command::Resolve(args) => execute_resolve(args),
    }
}
