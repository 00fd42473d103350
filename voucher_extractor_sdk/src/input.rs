//! Input file loading
//!
//! Records, configurations and selections are read as JSON or TOML by file
//! extension and handed to the extractor as `serde_json::Value`.

use crate::error::{CliError, Result};
use serde_json::Value;
use std::path::Path;
use voucher_extractor_base::types::FieldSelection;
use voucher_formula::log_debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(DocumentFormat::Json),
            Some("toml") => Ok(DocumentFormat::Toml),
            _ => Err(CliError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

pub fn parse_document(text: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(text)?),
        DocumentFormat::Toml => Ok(toml::from_str(text)?),
    }
}

/// Read a `.json` or `.toml` file into a JSON value
pub fn load_document(path: &Path) -> Result<Value> {
    let format = DocumentFormat::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;

    log_debug!("Loaded input file",
        "path" => path.display(),
        "bytes" => text.len()
    );

    parse_document(&text, format)
}

/// Load a records file: a JSON array of records, or one record.
///
/// A TOML records file holds its records under a top-level `records` array.
pub fn load_records(path: &Path) -> Result<Vec<Value>> {
    let document = load_document(path)?;
    Ok(split_records(document))
}

fn split_records(document: Value) -> Vec<Value> {
    match document {
        Value::Array(records) => records,
        Value::Object(mut map) if matches!(map.get("records"), Some(Value::Array(_))) => {
            match map.remove("records") {
                Some(Value::Array(records)) => records,
                _ => Vec::new(),
            }
        }
        other => vec![other],
    }
}

pub fn load_selection(path: Option<&Path>) -> Result<Option<FieldSelection>> {
    path.map(|path| -> Result<FieldSelection> {
        let document = load_document(path)?;
        Ok(FieldSelection::from_value(&document)?)
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("config.JSON")).unwrap(),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/b.toml")).unwrap(),
            DocumentFormat::Toml
        );
        assert!(matches!(
            DocumentFormat::from_path(Path::new("config.yaml")),
            Err(CliError::UnsupportedFormat { .. })
        ));
        assert!(DocumentFormat::from_path(Path::new("config")).is_err());
    }

    #[test]
    fn test_parse_toml_envelope() {
        let value = parse_document(
            "[[header]]\nName = \"$NAME\"\n",
            DocumentFormat::Toml,
        )
        .unwrap();
        assert_eq!(value, json!({"header": [{"Name": "$NAME"}]}));
    }

    #[test]
    fn test_split_records() {
        assert_eq!(split_records(json!([{"A": 1}, {"A": 2}])).len(), 2);
        assert_eq!(split_records(json!({"A": 1})), vec![json!({"A": 1})]);
        assert_eq!(
            split_records(json!({"records": [{"A": 1}]})),
            vec![json!({"A": 1})]
        );
    }
}
