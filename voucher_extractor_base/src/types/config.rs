//! Table and field configuration
//!
//! Configurations arrive as loosely shaped JSON:
//!
//! ```text
//! { tableName: [ { outputField: "$formula" | [ { subField: "$formula" } ] } ] }
//! ```
//!
//! Building the typed form never fails. Anything that does not have the
//! expected shape is kept in a form that extraction skips or evaluates to
//! nothing; the validation module reports those cases.

use super::record::RecordError;
use voucher_formula::{log_debug, FormulaPath};

/// A formula as configured, with its parsed path when it parses
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaSource {
    pub raw: serde_json::Value,
    pub path: Option<FormulaPath>,
}

impl FormulaSource {
    pub fn from_value(raw: &serde_json::Value) -> Self {
        let path = match FormulaPath::parse_strict(raw) {
            Ok(path) => Some(path),
            Err(error) => {
                log_debug!(
                    code = error.code(),
                    "Configured formula does not parse",
                    "reason" => &error
                );
                None
            }
        };

        Self {
            raw: raw.clone(),
            path,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.path.is_some()
    }
}

/// One column of an aggregate
#[derive(Debug, Clone, PartialEq)]
pub struct SubField {
    pub name: String,
    pub formula: FormulaSource,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Scalar(FormulaSource),
    Aggregate(Vec<SubField>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldDefinition {
    pub fn is_aggregate(&self) -> bool {
        matches!(self.kind, FieldKind::Aggregate(_))
    }
}

/// Output fields of one table, in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldConfiguration {
    pub fields: Vec<FieldDefinition>,
}

impl FieldConfiguration {
    /// Build from a `{ outputField: formula | [ {...} ] }` object.
    ///
    /// An array whose first element is an object marks an aggregate; only
    /// that first element is used. Every other value is kept as a scalar
    /// formula, which fails to parse unless it is a usable string.
    pub fn from_map(map: &serde_json::Map<String, serde_json::Value>) -> Self {
        let fields = map
            .iter()
            .map(|(name, value)| FieldDefinition {
                name: name.clone(),
                kind: match aggregate_body(value) {
                    Some(body) => FieldKind::Aggregate(
                        body.iter()
                            .map(|(sub_name, formula)| SubField {
                                name: sub_name.clone(),
                                formula: FormulaSource::from_value(formula),
                            })
                            .collect(),
                    ),
                    None => FieldKind::Scalar(FormulaSource::from_value(value)),
                },
            })
            .collect();

        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Nested configuration of an aggregate marker, if `value` is one
pub(crate) fn aggregate_body(
    value: &serde_json::Value,
) -> Option<&serde_json::Map<String, serde_json::Value>> {
    value.as_array()?.first()?.as_object()
}

/// Field configuration wrapped in a table's envelope, if well formed
pub(crate) fn table_body(
    value: &serde_json::Value,
) -> Option<&serde_json::Map<String, serde_json::Value>> {
    value.as_array()?.first()?.as_object()
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableEntry {
    Configured {
        name: String,
        fields: FieldConfiguration,
    },
    /// Envelope missing, empty or of the wrong shape
    Malformed { name: String },
}

impl TableEntry {
    pub fn name(&self) -> &str {
        match self {
            TableEntry::Configured { name, .. } | TableEntry::Malformed { name } => name,
        }
    }

    pub fn fields(&self) -> Option<&FieldConfiguration> {
        match self {
            TableEntry::Configured { fields, .. } => Some(fields),
            TableEntry::Malformed { .. } => None,
        }
    }
}

/// All tables, in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableConfiguration {
    pub tables: Vec<TableEntry>,
}

impl TableConfiguration {
    /// Build from a raw configuration value.
    ///
    /// A non-object value yields a configuration with no tables.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };

        let tables = map
            .iter()
            .map(|(name, envelope)| match table_body(envelope) {
                Some(body) => TableEntry::Configured {
                    name: name.clone(),
                    fields: FieldConfiguration::from_map(body),
                },
                None => TableEntry::Malformed { name: name.clone() },
            })
            .collect();

        Self { tables }
    }

    pub fn from_json_str(text: &str) -> Result<Self, RecordError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value))
    }

    /// Single-table configuration
    pub fn single(name: impl Into<String>, fields: FieldConfiguration) -> Self {
        Self {
            tables: vec![TableEntry::Configured {
                name: name.into(),
                fields,
            }],
        }
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TableEntry> {
        self.tables.iter()
    }

    /// Tables that will be skipped by extraction
    pub fn malformed_tables(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().filter_map(|table| match table {
            TableEntry::Malformed { name } => Some(name.as_str()),
            TableEntry::Configured { .. } => None,
        })
    }
}

impl From<&serde_json::Value> for TableConfiguration {
    fn from(value: &serde_json::Value) -> Self {
        Self::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_scalar_and_aggregate_fields() {
        let config = TableConfiguration::from_value(&json!({
            "ledgerentries": [{
                "VoucherName": "$NAME",
                "Entries": [{ "LedgerName": "$LEDGERNAME", "Amount": "$AMOUNT" }]
            }]
        }));

        assert_eq!(config.len(), 1);
        let fields = config.tables[0].fields().unwrap();
        assert_eq!(fields.len(), 2);

        assert_matches!(&fields.fields[0].kind, FieldKind::Scalar(source) if source.is_valid());
        assert_matches!(&fields.fields[1].kind, FieldKind::Aggregate(subs) if subs.len() == 2);
        assert_eq!(fields.get("Entries").map(|f| f.is_aggregate()), Some(true));
    }

    #[test]
    fn test_malformed_envelopes_are_kept() {
        let config = TableConfiguration::from_value(&json!({
            "a": [],
            "b": {"X": "$X"},
            "c": ["$X"],
            "d": null,
            "e": [{"X": "$X"}]
        }));

        let malformed: Vec<&str> = config.malformed_tables().collect();
        assert_eq!(malformed, vec!["a", "b", "c", "d"]);
        assert_matches!(config.tables[4], TableEntry::Configured { .. });
    }

    #[test]
    fn test_extra_envelope_elements_ignored() {
        let config = TableConfiguration::from_value(&json!({
            "t": [{"A": "$A"}, {"B": "$B"}]
        }));
        let fields = config.tables[0].fields().unwrap();
        assert_eq!(fields.len(), 1);
        assert!(fields.get("A").is_some());
    }

    #[test]
    fn test_non_string_formulas_become_unusable_scalars() {
        let fields = FieldConfiguration::from_map(
            json!({"n": 5, "e": "", "arr": [], "nested": ["$X"]})
                .as_object()
                .unwrap(),
        );

        for field in &fields.fields {
            assert_matches!(&field.kind, FieldKind::Scalar(source) if !source.is_valid());
        }
    }

    #[test]
    fn test_non_object_configuration_has_no_tables() {
        assert!(TableConfiguration::from_value(&json!("x")).is_empty());
        assert!(TableConfiguration::from_value(&json!(null)).is_empty());
    }

    #[test]
    fn test_declaration_order_preserved() {
        let config = TableConfiguration::from_json_str(
            r#"{"t": [{"Zeta": "$Z", "Alpha": "$A", "Mid": "$M"}]}"#,
        )
        .unwrap();
        let names: Vec<&str> = config.tables[0]
            .fields()
            .unwrap()
            .fields
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }
}
