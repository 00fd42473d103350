//! Field extraction
//!
//! Applies a table configuration to one voucher record. Extraction is total:
//! unusable formulas, malformed tables and missing data only ever remove
//! fields from the result.

use super::aggregate::AggregateExpander;
use super::options::ExtractorOptions;
use crate::resolution::{registry, PathResolver};
use crate::types::{
    Context, ExtractedValue, ExtractionResult, FieldConfiguration, FieldKind, FieldSelection,
    FormulaSource, TableConfiguration, TableEntry, VoucherRecord,
};
use serde_json::Value;
use voucher_formula::logging::codes;
use voucher_formula::{log_debug, FormulaPath};

/// Orchestrates scalar resolution and aggregate expansion
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldExtractor {
    resolver: PathResolver,
    aggregates: AggregateExpander,
}

impl FieldExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: &ExtractorOptions) -> Self {
        let resolver = PathResolver::new().with_miss_logging(options.log_resolution_misses);
        Self {
            resolver,
            aggregates: AggregateExpander::new(resolver),
        }
    }

    /// Extract every configured table from `record`.
    ///
    /// `None` and an empty selection both disable filtering. A field name
    /// produced by a later table replaces the earlier value in place.
    pub fn extract(
        &self,
        record: &Value,
        config: &TableConfiguration,
        selection: Option<&FieldSelection>,
    ) -> ExtractionResult {
        let no_filter = FieldSelection::new();
        let selection = selection.unwrap_or(&no_filter);
        let mut result = ExtractionResult::new();

        for table in config.iter() {
            match table {
                TableEntry::Configured { name, fields } => {
                    self.extract_table(record, name, fields, selection, &mut result);
                }
                TableEntry::Malformed { name } => {
                    log_debug!(
                        code = codes::validation::MALFORMED_TABLE,
                        "Skipping table with malformed envelope",
                        "table" => name
                    );
                }
            }
        }

        log_debug!(
            code = codes::success::EXTRACTION_COMPLETE,
            "Record extracted",
            "fields" => result.len()
        );

        result
    }

    pub fn extract_record(
        &self,
        record: &VoucherRecord,
        config: &TableConfiguration,
        selection: Option<&FieldSelection>,
    ) -> ExtractionResult {
        self.extract(record.as_json_value(), config, selection)
    }

    fn extract_table(
        &self,
        record: &Value,
        table: &str,
        fields: &FieldConfiguration,
        selection: &FieldSelection,
        result: &mut ExtractionResult,
    ) {
        let context = Context::root(record).with_collection(registry::kind_for_name(table));

        for field in &fields.fields {
            match &field.kind {
                FieldKind::Scalar(source) => {
                    if !selection.includes_scalar(&field.name) {
                        continue;
                    }
                    if let Some(value) = self.resolve_source(source, &context) {
                        result.insert(&field.name, ExtractedValue::Value(value));
                    }
                }
                FieldKind::Aggregate(sub_fields) => {
                    if !selection.includes_aggregate(&field.name) {
                        continue;
                    }
                    let rows = self.aggregates.expand(
                        record,
                        table,
                        &field.name,
                        sub_fields,
                        selection,
                    );
                    result.insert(&field.name, ExtractedValue::Rows(rows));
                }
            }
        }
    }

    fn resolve_source(&self, source: &FormulaSource, context: &Context<'_>) -> Option<Value> {
        let path = source.path.as_ref()?;
        self.resolver.resolve_value(path, context)
    }

    /// Evaluate one formula value against `record`.
    ///
    /// `table` supplies the context used for `Parent` navigation, exactly as
    /// for a scalar field declared in that table.
    pub fn resolve_formula(
        &self,
        record: &Value,
        formula: &Value,
        table: Option<&str>,
    ) -> Option<Value> {
        let path = FormulaPath::parse(formula)?;
        let context =
            Context::root(record).with_collection(table.and_then(registry::kind_for_name));
        self.resolver.resolve_value(&path, &context)
    }
}

/// Extract from raw JSON inputs with default options.
///
/// A selection that is not a `{ key: bool }` object is ignored.
pub fn extract_fields(record: &Value, config: &Value, selection: Option<&Value>) -> Value {
    let config = TableConfiguration::from_value(config);
    let selection = selection.and_then(|value| FieldSelection::from_value(value).ok());

    FieldExtractor::new()
        .extract(record, &config, selection.as_ref())
        .to_json()
}

/// Evaluate one formula with default options; `Value::Null` when it does
/// not resolve
pub fn resolve_formula(record: &Value, formula: &Value, table: Option<&str>) -> Value {
    FieldExtractor::new()
        .resolve_formula(record, formula, table)
        .unwrap_or(Value::Null)
}
