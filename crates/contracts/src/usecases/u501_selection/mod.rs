pub mod controller;
pub mod plan;
pub mod state;

pub use controller::SelectionController;
pub use plan::{DepartmentStyling, FacilityOverlay, Overlay, OverlayFeature, RenderPlan, Viewport};
pub use state::{
    DepartmentSelection, FacilityToggles, GroupFilter, SelectionEvent, SelectionState, ALL_DEPARTMENTS,
    ALL_GROUPS,
};
