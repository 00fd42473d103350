//! Extractor options

use serde::{Deserialize, Serialize};
use voucher_formula::config::constants::{DEFAULT_BATCH_THREADS_CAP, MAX_BATCH_THREADS};
use voucher_formula::logging;

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize to TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("max_threads must be between 1 and {max}, got {value}")]
    ThreadCount { value: usize, max: usize },
}

fn default_max_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get().min(DEFAULT_BATCH_THREADS_CAP))
        .unwrap_or(4)
}

fn default_log_resolution_misses() -> bool {
    logging::config::log_resolution_misses()
}

/// Tuning for single-record and batch extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorOptions {
    /// Worker threads used by batch extraction
    pub max_threads: usize,

    /// Extract batch records on the calling thread
    pub sequential: bool,

    /// Report every path segment that fails to resolve at debug level
    pub log_resolution_misses: bool,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            max_threads: default_max_threads(),
            sequential: false,
            log_resolution_misses: default_log_resolution_misses(),
        }
    }
}

impl ExtractorOptions {
    pub fn with_max_threads(mut self, max_threads: usize) -> Self {
        self.max_threads = max_threads;
        self
    }

    pub fn with_sequential(mut self, sequential: bool) -> Self {
        self.sequential = sequential;
        self
    }

    pub fn with_resolution_miss_logging(mut self, enabled: bool) -> Self {
        self.log_resolution_misses = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.max_threads == 0 || self.max_threads > MAX_BATCH_THREADS {
            return Err(OptionsError::ThreadCount {
                value: self.max_threads,
                max: MAX_BATCH_THREADS,
            });
        }
        Ok(())
    }

    /// Load options from a TOML string; missing keys take their defaults
    pub fn from_toml(toml_str: &str) -> Result<Self, OptionsError> {
        let options: Self = toml::from_str(toml_str)?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_toml(&self) -> Result<String, OptionsError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
