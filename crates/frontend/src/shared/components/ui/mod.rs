pub mod checkbox;
pub mod select;

pub use checkbox::Checkbox;
pub use select::Select;
