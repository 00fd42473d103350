pub mod aggregate;
pub mod batch;
pub mod extractor;
pub mod options;

pub use aggregate::{locate_collection, normalize_rows, AggregateExpander};
pub use batch::{extract_batch, BatchExtraction};
pub use extractor::{extract_fields, resolve_formula, FieldExtractor};
pub use options::{ExtractorOptions, OptionsError};
