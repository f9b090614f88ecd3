//! Core of the SST network map viewer: key normalization, facility and
//! boundary indexes, color registries and the selection state machine.
//!
//! Nothing here touches the browser; the frontend crate feeds fetched texts
//! in and applies the returned [`usecases::u501_selection::RenderPlan`]s.

pub mod domain;
pub mod shared;
pub mod usecases;
