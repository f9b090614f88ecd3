pub mod aggregate;
pub mod index;

pub use aggregate::{DepartmentBoundary, JoinStrategy, MunicipalityFeature};
pub use index::BoundaryIndex;
