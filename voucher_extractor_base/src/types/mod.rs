pub mod collection;
pub mod config;
pub mod record;
pub mod result;
pub mod selection;

pub use collection::{CollectionKind, Context};
pub use config::{
    FieldConfiguration, FieldDefinition, FieldKind, FormulaSource, SubField, TableConfiguration,
    TableEntry,
};
pub use record::{RecordError, VoucherRecord};
pub use result::{ExtractedRow, ExtractedValue, ExtractionResult};
pub use selection::{FieldSelection, SELECTION_PATH_SEPARATOR};
