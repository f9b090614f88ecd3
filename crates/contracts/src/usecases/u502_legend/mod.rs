pub mod legend;
pub mod options;

pub use legend::{build_legend, Legend, LegendItem};
pub use options::{department_options, group_options, DepartmentOption};
