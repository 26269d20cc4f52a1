//! Exhibition lookup: dual-table query and response shaping.

pub mod query;
pub mod transform;

pub use query::query_tables;
pub use transform::{transform_exhibition, transform_exhibitions};
