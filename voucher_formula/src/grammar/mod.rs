//! Grammar definitions for the formula path language

pub mod error;
pub mod keywords;
pub mod path;

pub use error::FormulaError;
pub use keywords::{
    is_parent_keyword, strip_sigil, PARENT_KEYWORD, PARENT_REFERENCE_KEY, SEGMENT_SEPARATOR, SIGIL,
};
pub use path::{FormulaPath, Segment};
