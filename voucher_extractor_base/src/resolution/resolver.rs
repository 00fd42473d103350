//! Path resolution against voucher trees
//!
//! Walks a parsed [`FormulaPath`] from the evaluation context's start node.
//! `Parent` moves upward; every other segment is looked up with the
//! candidate spellings from [`candidate_keys`]. The first miss ends
//! resolution.

use super::candidates::candidate_keys;
use crate::types::Context;
use serde_json::Value;
use voucher_formula::grammar::{Segment, PARENT_REFERENCE_KEY};
use voucher_formula::logging::codes;
use voucher_formula::{log_debug, FormulaPath};

/// Outcome of resolving a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    Found(&'a Value),
    NotFound,
}

impl<'a> Resolution<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    pub fn as_option(&self) -> Option<&'a Value> {
        match self {
            Resolution::Found(value) => Some(value),
            Resolution::NotFound => None,
        }
    }

    /// Owned value, or `None` when nothing was found
    pub fn into_value(self) -> Option<Value> {
        self.as_option().cloned()
    }
}

/// Look a single segment up on `node`.
///
/// Objects are searched with every candidate spelling; a JSON null counts
/// as absent. Arrays accept a non-negative integer index.
pub fn lookup_segment<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => {
            // The exact spelling is always the first candidate.
            if let Some(value) = map.get(segment).filter(|v| !v.is_null()) {
                return Some(value);
            }
            candidate_keys(segment)
                .iter()
                .skip(1)
                .find_map(|key| map.get(key).filter(|v| !v.is_null()))
        }
        Value::Array(items) => voucher_formula::grammar::strip_sigil(segment)
            .parse::<usize>()
            .ok()
            .and_then(|index| items.get(index))
            .filter(|v| !v.is_null()),
        _ => None,
    }
}

/// Stateless path resolver
#[derive(Debug, Clone, Copy, Default)]
pub struct PathResolver {
    log_misses: bool,
}

impl PathResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a debug event for every segment that fails to resolve
    pub fn with_miss_logging(mut self, enabled: bool) -> Self {
        self.log_misses = enabled;
        self
    }

    pub fn resolve<'a>(&self, path: &FormulaPath, context: &Context<'a>) -> Resolution<'a> {
        let mut current = context.start();

        for (position, segment) in path.iter().enumerate() {
            current = match segment {
                Segment::Parent => self.parent_of(current, context),
                Segment::Key(text) => match lookup_segment(current, text) {
                    Some(next) => next,
                    None => {
                        self.report_miss(path, position, text, current);
                        return Resolution::NotFound;
                    }
                },
            };
        }

        if current.is_null() {
            Resolution::NotFound
        } else {
            Resolution::Found(current)
        }
    }

    /// Resolve and collapse to an owned value at the public boundary
    pub fn resolve_value(&self, path: &FormulaPath, context: &Context<'_>) -> Option<Value> {
        self.resolve(path, context).into_value()
    }

    fn parent_of<'a>(&self, current: &'a Value, context: &Context<'a>) -> &'a Value {
        if context.iterating_known_collection() {
            return context.root;
        }

        match current.get(PARENT_REFERENCE_KEY) {
            Some(parent @ (Value::Object(_) | Value::Array(_))) => parent,
            _ => {
                if self.log_misses {
                    log_debug!(
                        code = codes::resolution::PARENT_FALLBACK_TO_ROOT,
                        "Parent resolved to record root"
                    );
                }
                context.root
            }
        }
    }

    fn report_miss(&self, path: &FormulaPath, position: usize, segment: &str, node: &Value) {
        if !self.log_misses {
            return;
        }

        if node.is_object() || node.is_array() {
            log_debug!(
                code = codes::resolution::SEGMENT_NOT_FOUND,
                "No candidate key matched formula segment",
                "formula" => path,
                "segment" => segment,
                "position" => position
            );
        } else {
            log_debug!(
                code = codes::resolution::NON_CONTAINER_NODE,
                "Formula continues past a scalar value",
                "formula" => path,
                "segment" => segment,
                "position" => position
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CollectionKind;
    use serde_json::json;

    fn path(text: &str) -> FormulaPath {
        FormulaPath::parse_str(text).unwrap()
    }

    fn resolve(text: &str, context: &Context<'_>) -> Option<Value> {
        PathResolver::new().resolve_value(&path(text), context)
    }

    #[test]
    fn test_case_tolerance() {
        let pascal = json!({"PartyLedgerName": "Acme"});
        let lower = json!({"partyledgername": "Acme"});
        let upper = json!({"PARTYLEDGERNAME": "Acme"});
        let snake = json!({"party_ledger_name": "Acme"});

        for record in [&pascal, &lower, &upper, &snake] {
            assert_eq!(
                resolve("$PartyLedgerName", &Context::root(record)),
                Some(json!("Acme"))
            );
        }
    }

    #[test]
    fn test_sigil_prefixed_key_on_record() {
        let record = json!({"$Amount": 12});
        assert_eq!(resolve("$Amount", &Context::root(&record)), Some(json!(12)));

        let nested = json!({"Ledger": {"$amount": 3}});
        assert_eq!(
            resolve("Ledger:$Amount", &Context::root(&nested)),
            Some(json!(3))
        );
    }

    #[test]
    fn test_nested_path_and_short_circuit() {
        let record = json!({"Ledger": {"Name": "Cash", "Meta": {"Code": 7}}});
        let ctx = Context::root(&record);

        assert_eq!(resolve("$Ledger:Meta:Code", &ctx), Some(json!(7)));
        assert_eq!(resolve("$Ledger:Missing:Code", &ctx), None);
        assert_eq!(resolve("$Ledger:Name:Deeper", &ctx), None);
    }

    #[test]
    fn test_null_counts_as_absent() {
        let record = json!({"name": null, "NAME": "Fallback", "gone": null});
        let ctx = Context::root(&record);

        assert_eq!(resolve("$name", &ctx), Some(json!("Fallback")));
        assert_eq!(resolve("$gone", &ctx), None);
    }

    #[test]
    fn test_array_index_segment() {
        let record = json!({"Items": [{"Name": "first"}, {"Name": "second"}]});
        let ctx = Context::root(&record);

        assert_eq!(resolve("$Items:1:Name", &ctx), Some(json!("second")));
        assert_eq!(resolve("$Items:5:Name", &ctx), None);
        assert_eq!(resolve("$Items:x", &ctx), None);
    }

    #[test]
    fn test_parent_in_known_collection_jumps_to_root() {
        let record = json!({
            "NAME": "V1",
            "allledgerentries": [{"LEDGERNAME": "Bank", "NAME": "row"}]
        });
        let row = &record["allledgerentries"][0];
        let ctx = Context::root(&record)
            .with_collection(Some(CollectionKind::LedgerEntries))
            .for_row(row);

        assert_eq!(resolve("$Parent:$NAME", &ctx), Some(json!("V1")));
        assert_eq!(resolve("$NAME", &ctx), Some(json!("row")));
        assert_eq!(resolve("$Parent:Parent:NAME", &ctx), Some(json!("V1")));
    }

    #[test]
    fn test_parent_uses_explicit_reference_outside_collections() {
        let record = json!({
            "NAME": "root",
            "Child": {"_parent": {"NAME": "explicit"}, "Value": 1}
        });
        let ctx = Context::root(&record);

        assert_eq!(resolve("$Child:Parent:NAME", &ctx), Some(json!("explicit")));
        assert_eq!(resolve("$Parent:NAME", &ctx), Some(json!("root")));
    }

    #[test]
    fn test_parent_ignores_scalar_reference() {
        let record = json!({"NAME": "root", "Child": {"_parent": "nope"}});
        let ctx = Context::root(&record);
        assert_eq!(resolve("$Child:Parent:NAME", &ctx), Some(json!("root")));
    }

    #[test]
    fn test_unknown_collection_row_parent_falls_back() {
        let record = json!({"NAME": "V1", "rows": [{"X": 1}]});
        let row = &record["rows"][0];
        let ctx = Context::root(&record).for_row(row);

        // No recognised collection, no explicit reference: root
        assert_eq!(resolve("$Parent:NAME", &ctx), Some(json!("V1")));
    }

    #[test]
    fn test_exact_spelling_wins_over_variants() {
        let record = json!({"name": "lower", "Name": "exact", "NAME": "upper"});
        assert_eq!(lookup_segment(&record, "Name"), Some(&json!("exact")));
        assert_eq!(lookup_segment(&record, "NAME"), Some(&json!("upper")));

        let variants_only = json!({"name": null, "NAME": "upper"});
        assert_eq!(lookup_segment(&variants_only, "Name"), Some(&json!("upper")));
    }

    #[test]
    fn test_inner_sigil_parent_is_a_literal_key() {
        let record = json!({
            "NAME": "V1",
            "Child": {"$Parent": {"NAME": "lit"}}
        });
        let ctx = Context::root(&record);

        assert_eq!(resolve("Child:$Parent:NAME", &ctx), Some(json!("lit")));
        assert_eq!(resolve("Child:Parent:NAME", &ctx), Some(json!("V1")));
        assert_eq!(resolve("$Parent:$NAME", &ctx), Some(json!("V1")));
    }

    #[test]
    fn test_resolution_tagging() {
        let record = json!({"A": 0});
        let ctx = Context::root(&record);
        let resolver = PathResolver::new().with_miss_logging(true);

        assert_eq!(
            resolver.resolve(&path("$A"), &ctx),
            Resolution::Found(&json!(0))
        );
        assert!(!resolver.resolve(&path("$B"), &ctx).is_found());
    }
}
