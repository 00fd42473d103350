//! Extraction results

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One row produced by an aggregate
pub type ExtractedRow = serde_json::Map<String, serde_json::Value>;

/// Value of one output field
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ExtractedValue {
    /// Resolved scalar field (never null)
    Value(serde_json::Value),
    /// Aggregate rows, possibly empty
    Rows(Vec<ExtractedRow>),
}

impl ExtractedValue {
    pub fn as_value(&self) -> Option<&serde_json::Value> {
        match self {
            ExtractedValue::Value(value) => Some(value),
            ExtractedValue::Rows(_) => None,
        }
    }

    pub fn as_rows(&self) -> Option<&[ExtractedRow]> {
        match self {
            ExtractedValue::Rows(rows) => Some(rows),
            ExtractedValue::Value(_) => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ExtractedValue::Value(value) => value.clone(),
            ExtractedValue::Rows(rows) => serde_json::Value::Array(
                rows.iter()
                    .cloned()
                    .map(serde_json::Value::Object)
                    .collect(),
            ),
        }
    }
}

/// Ordered map from output field name to extracted value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionResult {
    fields: Vec<(String, ExtractedValue)>,
}

impl ExtractionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field. A field already present keeps its position and takes
    /// the new value.
    pub fn insert(&mut self, name: &str, value: ExtractedValue) {
        match self.fields.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ExtractedValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExtractedValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Plain JSON object with fields in output order
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.fields
                .iter()
                .map(|(name, value)| (name.clone(), value.to_json()))
                .collect(),
        )
    }
}

impl Serialize for ExtractionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: serde_json::Value) -> ExtractedRow {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut result = ExtractionResult::new();
        result.insert("A", ExtractedValue::Value(json!(1)));
        result.insert("B", ExtractedValue::Value(json!(2)));
        result.insert("A", ExtractedValue::Value(json!(3)));

        assert_eq!(result.field_names(), vec!["A", "B"]);
        assert_eq!(result.get("A").and_then(|v| v.as_value()), Some(&json!(3)));
    }

    #[test]
    fn test_serializes_to_plain_shape() {
        let mut result = ExtractionResult::new();
        result.insert("VoucherName", ExtractedValue::Value(json!("V1")));
        result.insert(
            "Entries",
            ExtractedValue::Rows(vec![row(json!({"LedgerName": "Cash", "Amount": 5}))]),
        );
        result.insert("Empty", ExtractedValue::Rows(Vec::new()));

        let text = serde_json::to_string(&result).unwrap();
        assert_eq!(
            text,
            r#"{"VoucherName":"V1","Entries":[{"LedgerName":"Cash","Amount":5}],"Empty":[]}"#
        );
        assert_eq!(serde_json::to_value(&result).unwrap(), result.to_json());
    }
}
