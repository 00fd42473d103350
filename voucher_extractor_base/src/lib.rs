//! # Voucher Extractor - derived fields over accounting voucher records
//!
//! Applies a table configuration of formula paths to a voucher record and
//! produces a flat map of output fields. Scalar fields resolve one formula;
//! aggregate fields expand a sub-collection (ledger entries, inventory
//! entries, bill or batch allocations) into rows.
//!
//! ```
//! use serde_json::json;
//! use voucher_extractor_base::extract_fields;
//!
//! let record = json!({"NAME": "V1", "allledgerentries": [{"LEDGERNAME": "Cash"}]});
//! let config = json!({"ledgerentries": [{
//!     "Voucher": "$NAME",
//!     "Entries": [{"Ledger": "$LEDGERNAME"}]
//! }]});
//!
//! let output = extract_fields(&record, &config, None);
//! assert_eq!(output, json!({"Voucher": "V1", "Entries": [{"Ledger": "Cash"}]}));
//! ```

pub mod extraction;
pub mod resolution;
pub mod types;
pub mod validation;

// Convenience re-exports
pub use extraction::{
    extract_batch, extract_fields, resolve_formula, BatchExtraction, ExtractorOptions,
    FieldExtractor, OptionsError,
};
pub use validation::{validate_table_configuration, ValidationReport};

pub mod prelude {
    pub use crate::extraction::{
        extract_batch, extract_fields, resolve_formula, AggregateExpander, BatchExtraction,
        ExtractorOptions, FieldExtractor, OptionsError,
    };

    pub use crate::resolution::{PathResolver, Resolution};

    pub use crate::types::{
        CollectionKind, ExtractedRow, ExtractedValue, ExtractionResult, FieldConfiguration,
        FieldSelection, RecordError, TableConfiguration, VoucherRecord,
    };

    pub use crate::validation::{
        validate_table_configuration, ConfigIssue, ConfigIssueKind, Severity, ValidationReport,
    };

    pub use voucher_formula::{FormulaError, FormulaPath};
}
