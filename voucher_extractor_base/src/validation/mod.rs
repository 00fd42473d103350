//! Table configuration validation
//!
//! Extraction accepts any configuration and silently skips what it cannot
//! use. Validation walks the same raw value and explains what would be
//! skipped. It never changes what extraction produces.

pub mod issues;
pub mod report;

pub use issues::{ConfigIssue, ConfigIssueKind, Severity};
pub use report::ValidationReport;

use crate::resolution::registry;
use crate::types::record::RecordError;
use serde_json::{Map, Value};
use voucher_formula::logging::codes;
use voucher_formula::{log_error, log_success, log_warning, FormulaPath};

/// Check a raw table configuration.
pub fn validate_table_configuration(config: &Value) -> ValidationReport {
    let mut report = ValidationReport::new();

    match config.as_object() {
        Some(tables) => {
            for (table, envelope) in tables {
                report.tables_checked += 1;
                validate_table(table, envelope, &mut report);
            }
        }
        None => report.push(ConfigIssue::new(
            "",
            ConfigIssueKind::ConfigurationNotObject {
                found: RecordError::type_name(config),
            },
        )),
    }

    for issue in &report.issues {
        let message = issue.kind.to_string();
        match issue.severity() {
            Severity::Error => log_error!(
                issue.kind.code(),
                &message,
                "location" => &issue.location
            ),
            Severity::Warning => log_warning!(
                code = issue.kind.code(),
                &message,
                "location" => &issue.location
            ),
        }
    }

    if report.is_valid() {
        log_success!(
            codes::success::VALIDATION_PASSED,
            "Table configuration validated",
            "tables" => report.tables_checked,
            "fields" => report.fields_checked,
            "warnings" => report.warning_count()
        );
    }

    report
}

/// Parse JSON text and validate it
pub fn validate_json_str(text: &str) -> Result<ValidationReport, RecordError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(validate_table_configuration(&value))
}

fn validate_table(table: &str, envelope: &Value, report: &mut ValidationReport) {
    let body = match envelope {
        Value::Array(items) => match items.first() {
            Some(Value::Object(body)) => {
                if items.len() > 1 {
                    report.push(ConfigIssue::new(
                        table,
                        ConfigIssueKind::ExtraTableElements {
                            count: items.len() - 1,
                        },
                    ));
                }
                body
            }
            Some(other) => {
                report.push(ConfigIssue::new(
                    table,
                    ConfigIssueKind::MalformedTable {
                        found: format!("list starting with {}", RecordError::type_name(other)),
                    },
                ));
                return;
            }
            None => {
                report.push(ConfigIssue::new(
                    table,
                    ConfigIssueKind::MalformedTable {
                        found: "empty list".to_string(),
                    },
                ));
                return;
            }
        },
        other => {
            report.push(ConfigIssue::new(
                table,
                ConfigIssueKind::MalformedTable {
                    found: RecordError::type_name(other).to_string(),
                },
            ));
            return;
        }
    };

    for (field, value) in body {
        report.fields_checked += 1;
        let location = format!("{}.{}", table, field);

        match value {
            Value::Array(items) if matches!(items.first(), Some(Value::Object(_))) => {
                if items.len() > 1 {
                    report.push(ConfigIssue::new(
                        location.clone(),
                        ConfigIssueKind::ExtraAggregateElements {
                            count: items.len() - 1,
                        },
                    ));
                }
                if let Some(Value::Object(sub_fields)) = items.first() {
                    validate_aggregate(table, field, &location, sub_fields, report);
                }
            }
            other => check_formula(&location, other, report),
        }
    }
}

fn validate_aggregate(
    table: &str,
    aggregate: &str,
    location: &str,
    sub_fields: &Map<String, Value>,
    report: &mut ValidationReport,
) {
    if sub_fields.is_empty() {
        report.push(ConfigIssue::new(location, ConfigIssueKind::EmptyAggregate));
    }

    if registry::resolve_kind(table, aggregate).is_none() {
        report.push(ConfigIssue::new(
            location,
            ConfigIssueKind::UnknownCollection {
                table: table.to_string(),
                aggregate: aggregate.to_string(),
            },
        ));
    }

    for (sub, value) in sub_fields {
        let sub_location = format!("{}.{}", location, sub);
        if matches!(value.as_array().and_then(|items| items.first()), Some(Value::Object(_))) {
            report.push(ConfigIssue::new(sub_location, ConfigIssueKind::NestedAggregate));
        } else {
            check_formula(&sub_location, value, report);
        }
    }
}

fn check_formula(location: &str, value: &Value, report: &mut ValidationReport) {
    if let Err(source) = FormulaPath::parse_strict(value) {
        report.push(ConfigIssue::new(
            location,
            ConfigIssueKind::InvalidFormula { source },
        ));
    }
}
