//! Voucher records
//!
//! A voucher is an arbitrary JSON tree. Nothing about its shape is checked
//! here: missing or oddly cased fields simply fail to resolve later.

use serde::{Deserialize, Serialize};
use voucher_formula::FormulaError;

/// Errors raised while building inputs from text or JSON
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Field selection must be an object, found {found}")]
    SelectionNotObject { found: &'static str },

    #[error("Field selection entry '{key}' must be a boolean, found {found}")]
    SelectionValueNotBoolean { key: String, found: &'static str },
}

impl RecordError {
    pub(crate) fn type_name(value: &serde_json::Value) -> &'static str {
        FormulaError::json_type_name(value)
    }
}

/// An accounting transaction record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoucherRecord {
    data: serde_json::Value,
}

impl VoucherRecord {
    pub fn from_json_value(value: serde_json::Value) -> Self {
        Self { data: value }
    }

    pub fn from_json_str(text: &str) -> Result<Self, RecordError> {
        Ok(Self::from_json_value(serde_json::from_str(text)?))
    }

    /// Create from header field pairs
    pub fn from_field_pairs(fields: Vec<(String, serde_json::Value)>) -> Self {
        let map: serde_json::Map<String, serde_json::Value> = fields.into_iter().collect();
        Self::from_json_value(serde_json::Value::Object(map))
    }

    pub fn as_json_value(&self) -> &serde_json::Value {
        &self.data
    }

    pub fn into_json_value(self) -> serde_json::Value {
        self.data
    }

    /// Number of top-level fields (0 for non-object records)
    pub fn field_count(&self) -> usize {
        self.data.as_object().map_or(0, |map| map.len())
    }
}

impl From<serde_json::Value> for VoucherRecord {
    fn from(value: serde_json::Value) -> Self {
        Self::from_json_value(value)
    }
}

impl AsRef<serde_json::Value> for VoucherRecord {
    fn as_ref(&self) -> &serde_json::Value {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_from_json_str() {
        let record = VoucherRecord::from_json_str(r#"{"NAME": "V1", "AMOUNT": 10}"#).unwrap();
        assert_eq!(record.field_count(), 2);
        assert_eq!(record.as_json_value()["NAME"], "V1");
    }

    #[test]
    fn test_invalid_json_is_reported() {
        assert_matches!(
            VoucherRecord::from_json_str("{not json"),
            Err(RecordError::Json(_))
        );
    }

    #[test]
    fn test_non_object_record_is_accepted() {
        let record = VoucherRecord::from(json!([1, 2, 3]));
        assert_eq!(record.field_count(), 0);
    }

    #[test]
    fn test_field_pairs_keep_order() {
        let record = VoucherRecord::from_field_pairs(vec![
            ("Z".to_string(), json!(1)),
            ("A".to_string(), json!(2)),
        ]);
        let keys: Vec<&String> = record.as_json_value().as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["Z", "A"]);
    }
}
