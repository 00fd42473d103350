//! Log codes and their classification
//!
//! Single source of truth for every code emitted by the extractor crates,
//! with category, severity and a short description for each.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for error, diagnostic and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// CLASSIFICATION TYPES
// ============================================================================

/// Severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Metadata attached to a code
#[derive(Debug, Clone)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
}

impl CodeMetadata {
    pub const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// System codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Formula parsing codes
pub mod formula {
    use super::Code;

    pub const NOT_A_STRING: Code = Code::new("F001");
    pub const EMPTY_FORMULA: Code = Code::new("F002");
    pub const NO_SEGMENTS: Code = Code::new("F003");
}

/// Path resolution codes
pub mod resolution {
    use super::Code;

    pub const SEGMENT_NOT_FOUND: Code = Code::new("R001");
    pub const NON_CONTAINER_NODE: Code = Code::new("R002");
    pub const PARENT_FALLBACK_TO_ROOT: Code = Code::new("R003");
}

/// Aggregate expansion codes
pub mod aggregate {
    use super::Code;

    pub const COLLECTION_NOT_FOUND: Code = Code::new("A001");
    pub const UNSUPPORTED_COLLECTION_VALUE: Code = Code::new("A002");
    pub const ROW_DROPPED: Code = Code::new("A003");
}

/// Configuration validation codes
pub mod validation {
    use super::Code;

    pub const MALFORMED_TABLE: Code = Code::new("V001");
    pub const INVALID_FORMULA: Code = Code::new("V002");
    pub const NESTED_AGGREGATE: Code = Code::new("V003");
    pub const UNKNOWN_COLLECTION: Code = Code::new("V004");
    pub const EXTRA_ENVELOPE_ELEMENTS: Code = Code::new("V005");
}

/// Command-line front end codes
pub mod cli {
    use super::Code;

    pub const INPUT_READ_FAILURE: Code = Code::new("C001");
    pub const INPUT_PARSE_FAILURE: Code = Code::new("C002");
    pub const OUTPUT_FAILURE: Code = Code::new("C003");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const EXTRACTION_COMPLETE: Code = Code::new("I010");
    pub const BATCH_EXTRACTION_COMPLETE: Code = Code::new("I011");
    pub const VALIDATION_PASSED: Code = Code::new("I020");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

static CODE_REGISTRY: OnceLock<HashMap<&'static str, CodeMetadata>> = OnceLock::new();

fn get_code_registry() -> &'static HashMap<&'static str, CodeMetadata> {
    CODE_REGISTRY.get_or_init(|| {
        use Severity::*;

        let entries = [
            CodeMetadata::new("ERR001", "System", Critical, false, "Internal error"),
            CodeMetadata::new(
                "ERR002",
                "System",
                Critical,
                false,
                "Logging or runtime initialization failed",
            ),
            CodeMetadata::new(
                "F001",
                "Formula",
                Low,
                true,
                "Formula value is not a string",
            ),
            CodeMetadata::new("F002", "Formula", Low, true, "Formula string is empty"),
            CodeMetadata::new(
                "F003",
                "Formula",
                Low,
                true,
                "Formula has no path segments after trimming",
            ),
            CodeMetadata::new(
                "R001",
                "Resolution",
                Low,
                true,
                "No candidate key matched a path segment",
            ),
            CodeMetadata::new(
                "R002",
                "Resolution",
                Low,
                true,
                "Path continued past a scalar value",
            ),
            CodeMetadata::new(
                "R003",
                "Resolution",
                Low,
                true,
                "Parent navigation fell back to the record root",
            ),
            CodeMetadata::new(
                "A001",
                "Aggregate",
                Low,
                true,
                "Sub-collection not present on record",
            ),
            CodeMetadata::new(
                "A002",
                "Aggregate",
                Medium,
                true,
                "Sub-collection holds a scalar value",
            ),
            CodeMetadata::new(
                "A003",
                "Aggregate",
                Low,
                true,
                "Aggregate row produced no fields",
            ),
            CodeMetadata::new(
                "V001",
                "Validation",
                High,
                true,
                "Table entry is not a one-element configuration envelope",
            ),
            CodeMetadata::new(
                "V002",
                "Validation",
                High,
                true,
                "Field formula cannot be parsed",
            ),
            CodeMetadata::new(
                "V003",
                "Validation",
                High,
                true,
                "Aggregate sub-field nests another aggregate",
            ),
            CodeMetadata::new(
                "V004",
                "Validation",
                Medium,
                true,
                "Aggregate does not name a known sub-collection",
            ),
            CodeMetadata::new(
                "V005",
                "Validation",
                Medium,
                true,
                "Envelope has extra elements that are ignored",
            ),
            CodeMetadata::new("C001", "Cli", High, false, "Input file could not be read"),
            CodeMetadata::new("C002", "Cli", High, false, "Input file could not be parsed"),
            CodeMetadata::new("C003", "Cli", High, false, "Output could not be written"),
            CodeMetadata::new("I001", "Success", Low, true, "Logging initialized"),
            CodeMetadata::new("I010", "Success", Low, true, "Extraction completed"),
            CodeMetadata::new("I011", "Success", Low, true, "Batch extraction completed"),
            CodeMetadata::new("I020", "Success", Low, true, "Configuration validated"),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

/// Get complete metadata for a code
pub fn get_metadata(code: &str) -> Option<&'static CodeMetadata> {
    get_code_registry().get(code)
}

/// Get severity for a code
pub fn get_severity(code: &str) -> Severity {
    get_metadata(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if the condition behind a code is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_metadata(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Get human-readable description for a code
pub fn get_description(code: &str) -> &'static str {
    get_metadata(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown code")
}

/// Get category for a code
pub fn get_category(code: &str) -> &'static str {
    get_metadata(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
