pub mod a001_facility_network;
pub mod a002_boundary;
pub mod common;
