//! Field selection filters

use super::record::RecordError;
use std::collections::HashMap;

/// Separator between an aggregate name and a sub-field name in selection keys
pub const SELECTION_PATH_SEPARATOR: char = '.';

/// Which output fields the caller wants.
///
/// Keys are `field` or `aggregate.subField`. An empty selection disables
/// filtering altogether; `false` entries count as unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelection {
    keys: HashMap<String, bool>,
}

impl FieldSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one selection entry
    pub fn with(mut self, key: impl Into<String>, selected: bool) -> Self {
        self.keys.insert(key.into(), selected);
        self
    }

    /// Build from a `{ key: bool }` object
    pub fn from_value(value: &serde_json::Value) -> Result<Self, RecordError> {
        let map = value
            .as_object()
            .ok_or_else(|| RecordError::SelectionNotObject {
                found: RecordError::type_name(value),
            })?;

        let mut keys = HashMap::with_capacity(map.len());
        for (key, entry) in map {
            let selected = entry
                .as_bool()
                .ok_or_else(|| RecordError::SelectionValueNotBoolean {
                    key: key.clone(),
                    found: RecordError::type_name(entry),
                })?;
            keys.insert(key.clone(), selected);
        }

        Ok(Self { keys })
    }

    pub fn from_json_str(text: &str) -> Result<Self, RecordError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// True when no entries exist, meaning "select everything"
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether `key` is explicitly selected
    pub fn is_selected(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    /// Whether any `aggregate.subField` entry is selected
    pub fn any_sub_field_selected(&self, aggregate: &str) -> bool {
        self.keys.iter().any(|(key, selected)| {
            *selected
                && key
                    .strip_prefix(aggregate)
                    .and_then(|rest| rest.strip_prefix(SELECTION_PATH_SEPARATOR))
                    .is_some_and(|sub| !sub.is_empty())
        })
    }

    /// Whether a scalar field should be evaluated
    pub fn includes_scalar(&self, field: &str) -> bool {
        self.is_empty() || self.is_selected(field)
    }

    /// Whether an aggregate should be evaluated at all
    pub fn includes_aggregate(&self, aggregate: &str) -> bool {
        self.is_empty() || self.is_selected(aggregate) || self.any_sub_field_selected(aggregate)
    }

    /// Whether a sub-field of an aggregate should be evaluated
    pub fn includes_sub_field(&self, aggregate: &str, sub_field: &str) -> bool {
        self.is_empty()
            || self.is_selected(aggregate)
            || self.is_selected(&format!(
                "{}{}{}",
                aggregate, SELECTION_PATH_SEPARATOR, sub_field
            ))
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for FieldSelection {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
