//! Common helpers shared by all domain indexes

pub mod normalize;

// Re-exports
pub use normalize::{collate, normalize, normalize_value, pick_first_prop, value_to_string};
