//! Sub-collection kinds and evaluation context

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical one-to-many groups carried by a voucher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    LedgerEntries,
    InventoryEntries,
    BillAllocations,
    BatchAllocations,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 4] = [
        CollectionKind::LedgerEntries,
        CollectionKind::InventoryEntries,
        CollectionKind::BillAllocations,
        CollectionKind::BatchAllocations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::LedgerEntries => "ledger_entries",
            CollectionKind::InventoryEntries => "inventory_entries",
            CollectionKind::BillAllocations => "bill_allocations",
            CollectionKind::BatchAllocations => "batch_allocations",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a formula is being evaluated.
///
/// `row` is set while an aggregate iterates a sub-collection; `collection`
/// is the kind derived from the table or aggregate name, if recognised.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub root: &'a serde_json::Value,
    pub row: Option<&'a serde_json::Value>,
    pub collection: Option<CollectionKind>,
}

impl<'a> Context<'a> {
    /// Evaluation against the record itself
    pub fn root(root: &'a serde_json::Value) -> Self {
        Self {
            root,
            row: None,
            collection: None,
        }
    }

    pub fn with_collection(mut self, collection: Option<CollectionKind>) -> Self {
        self.collection = collection;
        self
    }

    /// Evaluation against one row of a sub-collection
    pub fn for_row(self, row: &'a serde_json::Value) -> Self {
        Self {
            row: Some(row),
            ..self
        }
    }

    /// Node a path starts from
    pub fn start(&self) -> &'a serde_json::Value {
        self.row.unwrap_or(self.root)
    }

    /// Whether `Parent` jumps straight to the record root
    pub fn iterating_known_collection(&self) -> bool {
        self.collection.is_some() && self.row.is_some()
    }
}
