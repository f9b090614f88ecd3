pub mod bounds;
pub mod config;
pub mod error;
pub mod palette;
pub mod style;
