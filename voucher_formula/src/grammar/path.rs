//! Parsed formula paths
//!
//! A formula such as `$Parent:Ledger:$PartyLedgerName` is parsed by stripping
//! a single leading sigil from the whole string, splitting on `:`, trimming
//! each piece and dropping empty pieces. Segments keep any inner sigil so the
//! resolver can try them as literal keys.

use super::error::FormulaError;
use super::keywords::{is_parent_keyword, strip_sigil, SEGMENT_SEPARATOR, SIGIL};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a formula path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    /// Upward navigation (`Parent`, any casing)
    Parent,
    /// Ordinary key lookup, text as written (may carry a leading sigil)
    Key(String),
}

impl Segment {
    /// Classify a trimmed, non-empty piece of a formula
    pub fn from_text(text: &str) -> Self {
        if is_parent_keyword(text) {
            Segment::Parent
        } else {
            Segment::Key(text.to_string())
        }
    }

    pub fn is_parent(&self) -> bool {
        matches!(self, Segment::Parent)
    }

    /// Text as written in the formula
    pub fn as_text(&self) -> &str {
        match self {
            Segment::Parent => super::keywords::PARENT_KEYWORD,
            Segment::Key(text) => text,
        }
    }

    /// Key name with any leading sigil removed
    pub fn bare_name(&self) -> &str {
        strip_sigil(self.as_text())
    }

    /// Whether the segment was written with a leading sigil
    pub fn has_sigil(&self) -> bool {
        matches!(self, Segment::Key(text) if text.starts_with(SIGIL))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_text())
    }
}

/// An ordered, non-empty list of path segments
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormulaPath {
    segments: Vec<Segment>,
}

impl FormulaPath {
    /// Build a path from already-classified segments.
    ///
    /// Returns `None` for an empty segment list, since an empty path is not
    /// a valid formula.
    pub fn from_segments(segments: Vec<Segment>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    /// Parse a formula string
    pub fn parse_str(formula: &str) -> Result<Self, FormulaError> {
        if formula.is_empty() {
            return Err(FormulaError::Empty);
        }

        let body = strip_sigil(formula);
        let segments: Vec<Segment> = body
            .split(SEGMENT_SEPARATOR)
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(Segment::from_text)
            .collect();

        Self::from_segments(segments).ok_or_else(|| FormulaError::NoSegments {
            formula: formula.to_string(),
        })
    }

    /// Parse a formula from a configuration value, reporting why it failed
    pub fn parse_strict(value: &serde_json::Value) -> Result<Self, FormulaError> {
        match value {
            serde_json::Value::String(formula) => Self::parse_str(formula),
            other => Err(FormulaError::NotAString {
                found: FormulaError::json_type_name(other),
            }),
        }
    }

    /// Parse a formula from a configuration value.
    ///
    /// Non-string, empty and segment-less values all yield `None`.
    pub fn parse(value: &serde_json::Value) -> Option<Self> {
        Self::parse_strict(value).ok()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: a parsed path has at least one segment
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Whether the path navigates upward anywhere
    pub fn has_parent_navigation(&self) -> bool {
        self.segments.iter().any(Segment::is_parent)
    }
}

impl<'a> IntoIterator for &'a FormulaPath {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl std::str::FromStr for FormulaPath {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl fmt::Display for FormulaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", SIGIL)?;
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEGMENT_SEPARATOR)?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
