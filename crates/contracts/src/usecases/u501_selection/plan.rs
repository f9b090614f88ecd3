//! Output of a selection transition: everything the map and the controls
//! need to redraw from scratch.

use geojson::Feature;

use super::state::GroupFilter;
use crate::domain::a001_facility_network::FacilityCategory;
use crate::shared::bounds::Bounds;
use crate::shared::style::{DepartmentTone, PathStyle};
use crate::usecases::u502_legend::Legend;

/// Tone of every department boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentStyling {
    /// Nothing selected: all departments at default style
    Overview,
    /// A department is selected. `highlighted` is the position (in
    /// `BoundaryIndex::departments`) of the boundary registered under the
    /// key, `None` when the key has no boundary.
    Focus { highlighted: Option<usize> },
}

impl DepartmentStyling {
    pub fn tone_for(&self, position: usize) -> DepartmentTone {
        match self {
            DepartmentStyling::Overview => DepartmentTone::Default,
            DepartmentStyling::Focus { highlighted } if *highlighted == Some(position) => {
                DepartmentTone::Highlight
            }
            DepartmentStyling::Focus { .. } => DepartmentTone::Dimmed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OverlayFeature {
    pub feature: Feature,
    pub style: PathStyle,
    pub tooltip: String,
    pub bounds: Option<Bounds>,
}

/// A set of styled municipality polygons drawn as one layer
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    pub features: Vec<OverlayFeature>,
}

impl Overlay {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::union_all(self.features.iter().filter_map(|f| f.bounds.as_ref()))
    }
}

#[derive(Debug, Clone)]
pub struct FacilityOverlay {
    pub category: FacilityCategory,
    pub overlay: Overlay,
}

/// Camera instruction
#[derive(Debug, Clone, PartialEq)]
pub enum Viewport {
    /// Frame the whole country
    Overview { bounds: Bounds, padding: f64 },
    /// Fly to a department or to its visible overlays
    Focus { bounds: Bounds, padding: f64, max_zoom: f64 },
    /// Nothing to frame
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct RenderPlan {
    pub department_styling: DepartmentStyling,
    pub municipalities: Option<Overlay>,
    pub facilities: Vec<FacilityOverlay>,
    pub viewport: Viewport,
    /// Group select options (without the "all" entry), sorted for display
    pub group_options: Vec<String>,
    /// Effective group filter after the transition
    pub selected_group: GroupFilter,
    pub legend: Legend,
}

impl RenderPlan {
    /// Number of overlays drawn on top of the department boundaries
    pub fn overlay_count(&self) -> usize {
        self.municipalities.iter().count() + self.facilities.len()
    }

    pub fn facility_overlay(&self, category: FacilityCategory) -> Option<&Overlay> {
        self.facilities
            .iter()
            .find(|f| f.category == category)
            .map(|f| &f.overlay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_tones() {
        assert_eq!(DepartmentStyling::Overview.tone_for(3), DepartmentTone::Default);
        let focus = DepartmentStyling::Focus { highlighted: Some(1) };
        assert_eq!(focus.tone_for(1), DepartmentTone::Highlight);
        assert_eq!(focus.tone_for(0), DepartmentTone::Dimmed);
        let orphan = DepartmentStyling::Focus { highlighted: None };
        assert_eq!(orphan.tone_for(0), DepartmentTone::Dimmed);
    }
}
