//! Error types for the command-line front end

use std::path::PathBuf;
use thiserror::Error;
use voucher_extractor_base::types::RecordError;
use voucher_extractor_base::OptionsError;
use voucher_formula::logging::{codes, Code};

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported file format for {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Options(#[from] OptionsError),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Log code for this failure
    pub fn code(&self) -> Code {
        match self {
            CliError::Io { .. } => codes::cli::INPUT_READ_FAILURE,
            CliError::Output(_) => codes::cli::OUTPUT_FAILURE,
            CliError::Json(_)
            | CliError::Toml(_)
            | CliError::UnsupportedFormat { .. }
            | CliError::Record(_)
            | CliError::Options(_) => codes::cli::INPUT_PARSE_FAILURE,
        }
    }
}
