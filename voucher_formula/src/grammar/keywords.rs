//! Reserved symbols and keywords of the formula path language
//!
//! The language is intentionally tiny: a sigil that may prefix the whole
//! formula or any segment, a segment separator, and a single navigation
//! keyword.

/// Leading marker on formulas and optionally on individual segments
pub const SIGIL: char = '$';

/// Separates path segments
pub const SEGMENT_SEPARATOR: char = ':';

/// Upward navigation keyword (matched case-insensitively)
pub const PARENT_KEYWORD: &str = "Parent";

/// Key holding an explicit parent reference on a node
pub const PARENT_REFERENCE_KEY: &str = "_parent";

/// Remove a single leading sigil, if present
pub fn strip_sigil(text: &str) -> &str {
    text.strip_prefix(SIGIL).unwrap_or(text)
}

/// Check whether a segment is the Parent keyword.
///
/// A segment that still carries a sigil (`$Parent`) is a literal key.
pub fn is_parent_keyword(segment: &str) -> bool {
    segment.eq_ignore_ascii_case(PARENT_KEYWORD)
}
