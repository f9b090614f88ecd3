pub mod controls;
pub mod legend;
pub mod page;

pub use page::ViewerPage;
