pub mod dataset;

pub use dataset::{parse_features, Dataset};
