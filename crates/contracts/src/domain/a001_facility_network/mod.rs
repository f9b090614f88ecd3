pub mod aggregate;
pub mod index;

pub use aggregate::{FacilityCategory, FacilityRecord};
pub use index::FacilityIndex;
