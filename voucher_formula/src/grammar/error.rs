//! Formula parse errors
//!
//! Only strict parsing surfaces these. Evaluation treats every variant the
//! same way: the formula resolves to nothing.

use crate::logging::{codes, Code};

/// Reasons a formula value cannot be turned into a path
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormulaError {
    /// Formula value is not a JSON string
    #[error("Formula must be a string, found {found}")]
    NotAString { found: &'static str },

    /// Formula string is empty
    #[error("Formula is empty")]
    Empty,

    /// Formula has no usable segments after splitting and trimming
    #[error("Formula '{formula}' contains no path segments")]
    NoSegments { formula: String },
}

impl FormulaError {
    /// Log code reported when a configured formula fails to parse
    pub fn code(&self) -> Code {
        match self {
            FormulaError::NotAString { .. } => codes::formula::NOT_A_STRING,
            FormulaError::Empty => codes::formula::EMPTY_FORMULA,
            FormulaError::NoSegments { .. } => codes::formula::NO_SEGMENTS,
        }
    }

    /// Name of a JSON value's type, for error messages
    pub fn json_type_name(value: &serde_json::Value) -> &'static str {
        match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        }
    }
}
