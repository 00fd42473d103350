//! Configuration issue types

use std::fmt;
use voucher_formula::logging::{codes, Code};
use voucher_formula::FormulaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What is wrong with one part of a table configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigIssueKind {
    #[error("Table configuration must be an object, found {found}")]
    ConfigurationNotObject { found: &'static str },

    #[error("Table must be a one-element list wrapping a field object, found {found}")]
    MalformedTable { found: String },

    #[error("Table envelope has {count} extra element(s) that are ignored")]
    ExtraTableElements { count: usize },

    #[error("Unusable formula: {source}")]
    InvalidFormula {
        #[source]
        source: FormulaError,
    },

    #[error("Aggregate envelope has {count} extra element(s) that are ignored")]
    ExtraAggregateElements { count: usize },

    #[error("Aggregate declares no sub-fields")]
    EmptyAggregate,

    #[error("Aggregates cannot be nested; this sub-field is never resolved")]
    NestedAggregate,

    #[error("No known sub-collection for aggregate '{aggregate}' in table '{table}'; the record is searched by aggregate name")]
    UnknownCollection { table: String, aggregate: String },
}

impl ConfigIssueKind {
    pub fn severity(&self) -> Severity {
        match self {
            ConfigIssueKind::ConfigurationNotObject { .. }
            | ConfigIssueKind::MalformedTable { .. }
            | ConfigIssueKind::InvalidFormula { .. }
            | ConfigIssueKind::NestedAggregate => Severity::Error,
            ConfigIssueKind::ExtraTableElements { .. }
            | ConfigIssueKind::ExtraAggregateElements { .. }
            | ConfigIssueKind::EmptyAggregate
            | ConfigIssueKind::UnknownCollection { .. } => Severity::Warning,
        }
    }

    /// Log code reported for this issue
    pub fn code(&self) -> Code {
        match self {
            ConfigIssueKind::ConfigurationNotObject { .. }
            | ConfigIssueKind::MalformedTable { .. } => codes::validation::MALFORMED_TABLE,
            ConfigIssueKind::ExtraTableElements { .. }
            | ConfigIssueKind::ExtraAggregateElements { .. } => {
                codes::validation::EXTRA_ENVELOPE_ELEMENTS
            }
            ConfigIssueKind::InvalidFormula { .. } | ConfigIssueKind::EmptyAggregate => {
                codes::validation::INVALID_FORMULA
            }
            ConfigIssueKind::NestedAggregate => codes::validation::NESTED_AGGREGATE,
            ConfigIssueKind::UnknownCollection { .. } => codes::validation::UNKNOWN_COLLECTION,
        }
    }
}

/// One finding, located as `table`, `table.field` or `table.field.sub`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub location: String,
    pub kind: ConfigIssueKind,
}

impl ConfigIssue {
    pub fn new(location: impl Into<String>, kind: ConfigIssueKind) -> Self {
        Self {
            location: location.into(),
            kind,
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "severity": self.severity().as_str(),
            "code": self.kind.code().as_str(),
            "location": self.location,
            "message": self.kind.to_string(),
        })
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}] {}: {}", self.severity(), self.kind.code(), self.location, self.kind)
    }
}
