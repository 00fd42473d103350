//! Configuration validation report

use super::issues::{ConfigIssue, Severity};
use serde_json::{json, Value};

/// All issues found in one table configuration, in walk order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<ConfigIssue>,
    pub tables_checked: usize,
    pub fields_checked: usize,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: ConfigIssue) {
        self.issues.push(issue);
    }

    /// True when no error-severity issue was found; warnings are allowed
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(ConfigIssue::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == severity)
            .count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.issues.iter().filter(|issue| issue.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.issues.iter().filter(|issue| !issue.is_error())
    }

    /// Issues reported at or below `location`
    pub fn issues_at<'a>(&'a self, location: &'a str) -> impl Iterator<Item = &'a ConfigIssue> {
        self.issues.iter().filter(move |issue| {
            issue.location == location
                || issue
                    .location
                    .strip_prefix(location)
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }

    pub fn summary(&self) -> String {
        format!(
            "Validated {} table(s), {} field(s): {} error(s), {} warning(s)",
            self.tables_checked,
            self.fields_checked,
            self.error_count(),
            self.warning_count()
        )
    }

    pub fn to_json(&self) -> Value {
        json!({
            "valid": self.is_valid(),
            "tables_checked": self.tables_checked,
            "fields_checked": self.fields_checked,
            "error_count": self.error_count(),
            "warning_count": self.warning_count(),
            "issues": self.issues.iter().map(ConfigIssue::to_json).collect::<Vec<_>>(),
        })
    }
}
