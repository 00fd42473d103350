//! Sub-collection registry
//!
//! Static mapping from each logical sub-collection to the names it is known
//! by in configuration (aliases) and the property names it may be stored
//! under on a voucher (candidates, tried in order).

use crate::types::CollectionKind;

#[derive(Debug, Clone, Copy)]
pub struct SubCollection {
    pub kind: CollectionKind,
    /// Normalized names that identify this collection in table or
    /// aggregate names
    pub aliases: &'static [&'static str],
    /// Property names tried on the record, in order
    pub candidates: &'static [&'static str],
}

pub static SUB_COLLECTIONS: &[SubCollection] = &[
    SubCollection {
        kind: CollectionKind::LedgerEntries,
        aliases: &["ledgerentries", "ledgerentry", "ledgers"],
        candidates: &[
            "allledgerentries",
            "ledgerentries",
            "ALLLEDGERENTRIES",
            "LEDGERENTRIES",
            "AllLedgerEntries",
            "LedgerEntries",
            "ALLLEDGERENTRIES.LIST",
            "LEDGERENTRIES.LIST",
        ],
    },
    SubCollection {
        kind: CollectionKind::InventoryEntries,
        aliases: &["inventoryentries", "inventoryentry", "inventory"],
        candidates: &[
            "allinventoryentries",
            "inventoryentries",
            "ALLINVENTORYENTRIES",
            "INVENTORYENTRIES",
            "AllInventoryEntries",
            "InventoryEntries",
            "ALLINVENTORYENTRIES.LIST",
            "INVENTORYENTRIES.LIST",
        ],
    },
    SubCollection {
        kind: CollectionKind::BillAllocations,
        aliases: &["billallocations", "billallocation", "bills"],
        candidates: &[
            "billallocations",
            "BILLALLOCATIONS",
            "BillAllocations",
            "BILLALLOCATIONS.LIST",
        ],
    },
    SubCollection {
        kind: CollectionKind::BatchAllocations,
        aliases: &["batchallocations", "batchallocation", "batches"],
        candidates: &[
            "batchallocations",
            "BATCHALLOCATIONS",
            "BatchAllocations",
            "BATCHALLOCATIONS.LIST",
        ],
    },
];

/// Registry entry for a kind
pub fn lookup(kind: CollectionKind) -> Option<&'static SubCollection> {
    SUB_COLLECTIONS.iter().find(|entry| entry.kind == kind)
}

/// Candidate property names for a kind
pub fn candidates_for(kind: CollectionKind) -> &'static [&'static str] {
    match lookup(kind) {
        Some(entry) => entry.candidates,
        None => &[],
    }
}

/// Lowercase, drop `_ - .` and spaces, then drop an `all` prefix and a
/// `list` suffix
pub fn normalize_alias(name: &str) -> String {
    let squashed: String = name
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | '.') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    let without_all = squashed
        .strip_prefix("all")
        .filter(|rest| !rest.is_empty())
        .unwrap_or(&squashed);
    let without_list = without_all
        .strip_suffix("list")
        .filter(|rest| !rest.is_empty())
        .unwrap_or(without_all);

    without_list.to_string()
}

/// Identify the sub-collection a table or aggregate name refers to
pub fn kind_for_name(name: &str) -> Option<CollectionKind> {
    let normalized = normalize_alias(name);
    SUB_COLLECTIONS
        .iter()
        .find(|entry| entry.aliases.contains(&normalized.as_str()))
        .map(|entry| entry.kind)
}

/// Kind for an aggregate: table name first, then the aggregate's own name
pub fn resolve_kind(table: &str, aggregate: &str) -> Option<CollectionKind> {
    kind_for_name(table).or_else(|| kind_for_name(aggregate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_registered() {
        for kind in CollectionKind::ALL {
            let entry = lookup(kind).unwrap();
            assert!(!entry.candidates.is_empty());
            assert!(!entry.aliases.is_empty());
        }
    }

    #[test]
    fn test_ledger_candidate_order() {
        let candidates = candidates_for(CollectionKind::LedgerEntries);
        assert_eq!(candidates[0], "allledgerentries");
        assert_eq!(candidates[1], "ledgerentries");
        assert_eq!(candidates.last(), Some(&"LEDGERENTRIES.LIST"));
    }

    #[test]
    fn test_alias_normalization() {
        assert_eq!(normalize_alias("ALLLEDGERENTRIES.LIST"), "ledgerentries");
        assert_eq!(normalize_alias("Ledger_Entries"), "ledgerentries");
        assert_eq!(normalize_alias("bill-allocations"), "billallocations");
        assert_eq!(normalize_alias("all"), "all");
    }

    #[test]
    fn test_kind_for_name() {
        assert_eq!(kind_for_name("ledgerentries"), Some(CollectionKind::LedgerEntries));
        assert_eq!(kind_for_name("AllLedgerEntries"), Some(CollectionKind::LedgerEntries));
        assert_eq!(
            kind_for_name("Inventory Entries"),
            Some(CollectionKind::InventoryEntries)
        );
        assert_eq!(kind_for_name("BATCHALLOCATIONS.LIST"), Some(CollectionKind::BatchAllocations));
        assert_eq!(kind_for_name("vouchers"), None);
    }

    #[test]
    fn test_resolve_kind_prefers_table() {
        assert_eq!(
            resolve_kind("billallocations", "ledgerentries"),
            Some(CollectionKind::BillAllocations)
        );
        assert_eq!(
            resolve_kind("header", "ledgerentries"),
            Some(CollectionKind::LedgerEntries)
        );
        assert_eq!(resolve_kind("header", "Entries"), None);
    }
}
