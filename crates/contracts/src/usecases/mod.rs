pub mod u500_load_dataset;
pub mod u501_selection;
pub mod u502_legend;
