//! Selection Controller: owns the selection state and the color registries
//! and turns every UI event into a full [`RenderPlan`].
//!
//! Every transition recomputes from scratch; there is no diffing against the
//! previous plan.

use std::collections::HashSet;

use super::plan::{DepartmentStyling, FacilityOverlay, Overlay, OverlayFeature, RenderPlan, Viewport};
use super::state::{DepartmentSelection, GroupFilter, SelectionEvent, SelectionState};
use crate::domain::a001_facility_network::FacilityCategory;
use crate::domain::a002_boundary::MunicipalityFeature;
use crate::shared::config::{ViewConfig, ViewerConfig};
use crate::shared::palette::ColorRegistries;
use crate::shared::bounds::Bounds;
use crate::shared::style::PathStyle;
use crate::usecases::u500_load_dataset::Dataset;
use crate::usecases::u502_legend::{build_legend, department_options, group_options, DepartmentOption, Legend};

#[derive(Debug, Clone)]
pub struct SelectionController {
    dataset: Dataset,
    view: ViewConfig,
    colors: ColorRegistries,
    state: SelectionState,
}

impl SelectionController {
    /// Take ownership of the loaded dataset and produce the overview plan
    pub fn initialize(dataset: Dataset, config: &ViewerConfig) -> (Self, RenderPlan) {
        let mut controller = Self {
            dataset,
            view: config.view.clone(),
            colors: ColorRegistries::new(&config.palette),
            state: SelectionState::default(),
        };
        let plan = controller.reset();
        (controller, plan)
    }

    /// Dispatch a UI event.
    ///
    /// Returns `None` only for a group change while no department is
    /// selected, which has no visible effect.
    pub fn on_selection_change(&mut self, event: SelectionEvent) -> Option<RenderPlan> {
        match event {
            SelectionEvent::DepartmentChanged(selection) => Some(self.select_department(selection)),
            SelectionEvent::GroupChanged(filter) => self.select_group(filter),
            SelectionEvent::FacilityToggled(category, enabled) => {
                Some(self.set_facility_toggle(category, enabled))
            }
            SelectionEvent::DepartmentClicked(key) => Some(self.click_department(&key)),
        }
    }

    pub fn select_department(&mut self, selection: DepartmentSelection) -> RenderPlan {
        match selection {
            DepartmentSelection::All => self.reset(),
            DepartmentSelection::Key(key) => {
                self.state.department = DepartmentSelection::Key(key);
                self.render_department()
            }
        }
    }

    /// Map click on a department boundary; same as picking it in the select
    pub fn click_department(&mut self, key: &str) -> RenderPlan {
        self.select_department(DepartmentSelection::Key(key.to_string()))
    }

    pub fn select_group(&mut self, filter: GroupFilter) -> Option<RenderPlan> {
        if self.state.department.key().is_none() {
            return None;
        }
        self.state.group = filter;
        Some(self.render_department())
    }

    pub fn set_facility_toggle(&mut self, category: FacilityCategory, enabled: bool) -> RenderPlan {
        self.state.toggles.set(category, enabled);
        self.rerender()
    }

    /// Back to the overview: departments only, group filter cleared.
    /// Facility toggles are kept.
    pub fn reset(&mut self) -> RenderPlan {
        self.state.department = DepartmentSelection::All;
        self.state.group = GroupFilter::All;

        let viewport = match self.dataset.boundaries.all_bounds() {
            Some(bounds) => Viewport::Overview {
                bounds,
                padding: self.view.overview_padding,
            },
            None => Viewport::Unchanged,
        };

        RenderPlan {
            department_styling: DepartmentStyling::Overview,
            municipalities: None,
            facilities: Vec::new(),
            viewport,
            group_options: Vec::new(),
            selected_group: GroupFilter::All,
            legend: Legend::default(),
        }
    }

    /// Re-render the current state (department view, or the overview)
    pub fn rerender(&mut self) -> RenderPlan {
        match self.state.department {
            DepartmentSelection::All => self.reset(),
            DepartmentSelection::Key(_) => self.render_department(),
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn colors(&self) -> &ColorRegistries {
        &self.colors
    }

    pub fn department_options(&self) -> Vec<DepartmentOption> {
        department_options(&self.dataset.boundaries)
    }

    /// Style a department boundary returns to when the pointer leaves it
    pub fn hover_out_style(&self, position: usize) -> PathStyle {
        self.department_styling().tone_for(position).style()
    }

    fn department_styling(&self) -> DepartmentStyling {
        match self.state.department.key() {
            None => DepartmentStyling::Overview,
            Some(key) => DepartmentStyling::Focus {
                highlighted: self.dataset.boundaries.department_position(key),
            },
        }
    }

    fn render_department(&mut self) -> RenderPlan {
        let key = match &self.state.department {
            DepartmentSelection::Key(key) => key.clone(),
            DepartmentSelection::All => return self.reset(),
        };

        let department_styling = self.department_styling();
        let department_bounds = self.dataset.boundaries.department(&key).and_then(|d| d.bounds);
        let padding = self.view.focus_padding;
        let max_zoom = self.view.max_zoom_on_focus;
        let focus = move |bounds: Bounds| Viewport::Focus { bounds, padding, max_zoom };

        // the index is read while the registries grow
        let dataset = &self.dataset;
        let colors = &mut self.colors;
        let state = &mut self.state;
        let municipalities = dataset.boundaries.municipalities(&key);

        if municipalities.is_empty() {
            log::warn!("No municipalities found for department key '{}'", key);
            state.group = GroupFilter::All;
            return RenderPlan {
                department_styling,
                municipalities: None,
                facilities: Vec::new(),
                viewport: department_bounds.map(focus).unwrap_or(Viewport::Unchanged),
                group_options: Vec::new(),
                selected_group: GroupFilter::All,
                legend: Legend::default(),
            };
        }

        // group options come from the unfiltered subset
        let options = group_options(municipalities.iter().map(|m| m.group.as_str()));
        if let GroupFilter::Value(group) = &state.group {
            if !municipalities.iter().any(|m| &m.group == group) {
                state.group = GroupFilter::All;
            }
        }

        let mut visible_groups: Vec<String> = Vec::new();
        let mut seen_groups = HashSet::new();
        let mut muni_overlay = Overlay::default();
        for m in municipalities.iter().filter(|m| state.group.matches(&m.group)) {
            let color = colors.group.color_for(&m.group);
            if seen_groups.insert(m.group.as_str()) {
                visible_groups.push(m.group.clone());
            }
            muni_overlay.features.push(OverlayFeature {
                feature: m.feature.clone(),
                style: PathStyle::municipality(&color),
                tooltip: m.name.clone(),
                bounds: m.bounds,
            });
        }

        let mut facility_overlays = Vec::new();
        let mut facility_names: Vec<(FacilityCategory, Vec<String>)> = Vec::new();
        for category in state.toggles.enabled() {
            let (overlay, names) = facility_overlay(municipalities, category, dataset, colors);
            facility_names.push((category, names));
            if !overlay.is_empty() {
                facility_overlays.push(FacilityOverlay { category, overlay });
            }
        }

        let visible_bounds = muni_overlay
            .bounds()
            .into_iter()
            .chain(facility_overlays.iter().filter_map(|f| f.overlay.bounds()))
            .reduce(|a, b| a.union(&b));
        let viewport = visible_bounds
            .or(department_bounds)
            .map(focus)
            .unwrap_or(Viewport::Unchanged);

        let legend = build_legend(&visible_groups, &facility_names, colors);

        RenderPlan {
            department_styling,
            municipalities: Some(muni_overlay),
            facilities: facility_overlays,
            viewport,
            group_options: options,
            selected_group: state.group.clone(),
            legend,
        }
    }
}

/// Overlay of the municipalities served by a facility of `category`, plus
/// the distinct facility names in first-seen order
fn facility_overlay(
    municipalities: &[MunicipalityFeature],
    category: FacilityCategory,
    dataset: &Dataset,
    colors: &mut ColorRegistries,
) -> (Overlay, Vec<String>) {
    let registry = colors.facility_mut(category);
    let mut overlay = Overlay::default();
    let mut names: Vec<String> = Vec::new();

    for m in municipalities {
        let Some(name) = dataset.facilities.value(&m.facility_code, category) else {
            continue;
        };
        let color = registry.color_for(name);
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
        overlay.features.push(OverlayFeature {
            feature: m.feature.clone(),
            style: PathStyle::facility(&color),
            tooltip: format!("{} ({}: {})", m.name, category.code(), name),
            bounds: m.bounds,
        });
    }

    (overlay, names)
}
