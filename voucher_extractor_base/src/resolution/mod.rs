//! Name and path resolution over voucher trees

pub mod candidates;
pub mod registry;
pub mod resolver;

pub use candidates::candidate_keys;
pub use registry::{kind_for_name, resolve_kind, SubCollection, SUB_COLLECTIONS};
pub use resolver::{lookup_segment, PathResolver, Resolution};
