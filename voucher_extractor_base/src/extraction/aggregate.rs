//! Aggregate expansion
//!
//! An aggregate field produces one output row per entry of a sub-collection.
//! The collection is located through the registry, normalized to a list of
//! rows, and each row is evaluated with the aggregate's sub-fields.

use crate::resolution::{lookup_segment, registry, PathResolver};
use crate::types::{CollectionKind, Context, ExtractedRow, FieldSelection, SubField};
use serde_json::Value;
use voucher_formula::logging::codes;
use voucher_formula::log_debug;

/// Find the value holding a sub-collection on `record`.
///
/// Registry candidates for `kind` are tried first, in order; a null value
/// is skipped. Failing that, the aggregate's own name is looked up with its
/// case variants.
pub fn locate_collection<'a>(
    record: &'a Value,
    kind: Option<CollectionKind>,
    aggregate_name: &str,
) -> Option<&'a Value> {
    let from_registry = kind.and_then(|kind| {
        let map = record.as_object()?;
        registry::candidates_for(kind)
            .iter()
            .find_map(|name| map.get(*name).filter(|v| !v.is_null()))
    });

    from_registry.or_else(|| lookup_segment(record, aggregate_name))
}

/// Turn a located value into rows: arrays as-is, a single object as one
/// row, anything else as none
pub fn normalize_rows(value: Option<&Value>) -> Vec<&Value> {
    match value {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(object @ Value::Object(_)) => vec![object],
        _ => Vec::new(),
    }
}

/// Expands aggregate fields over sub-collections
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateExpander {
    resolver: PathResolver,
}

impl AggregateExpander {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }

    /// Evaluate `sub_fields` over every row of the collection behind
    /// `aggregate_name`. Rows with no resolved sub-field are dropped.
    pub fn expand(
        &self,
        record: &Value,
        table: &str,
        aggregate_name: &str,
        sub_fields: &[SubField],
        selection: &FieldSelection,
    ) -> Vec<ExtractedRow> {
        let kind = registry::resolve_kind(table, aggregate_name);
        let located = locate_collection(record, kind, aggregate_name);

        match located {
            None => {
                log_debug!(
                    code = codes::aggregate::COLLECTION_NOT_FOUND,
                    "Sub-collection not present on record",
                    "table" => table,
                    "aggregate" => aggregate_name
                );
                return Vec::new();
            }
            Some(value) if !value.is_array() && !value.is_object() => {
                log_debug!(
                    code = codes::aggregate::UNSUPPORTED_COLLECTION_VALUE,
                    "Sub-collection holds a scalar value",
                    "table" => table,
                    "aggregate" => aggregate_name
                );
            }
            Some(_) => {}
        }

        let active: Vec<&SubField> = sub_fields
            .iter()
            .filter(|sub| selection.includes_sub_field(aggregate_name, &sub.name))
            .collect();

        let base = Context::root(record).with_collection(kind);
        let mut rows = Vec::new();

        for (index, row) in normalize_rows(located).into_iter().enumerate() {
            let context = base.for_row(row);
            let mut output = ExtractedRow::new();

            for sub in &active {
                let Some(path) = &sub.formula.path else {
                    continue;
                };
                if let Some(value) = self.resolver.resolve_value(path, &context) {
                    output.insert(sub.name.clone(), value);
                }
            }

            if output.is_empty() {
                log_debug!(
                    code = codes::aggregate::ROW_DROPPED,
                    "Aggregate row produced no fields",
                    "aggregate" => aggregate_name,
                    "row" => index
                );
            } else {
                rows.push(output);
            }
        }

        rows
    }
}
