use contracts::shared::config::ViewerConfig;
use contracts::shared::style::PathStyle;
use contracts::usecases::u500_load_dataset::Dataset;
use contracts::usecases::u501_selection::{
    FacilityToggles, RenderPlan, SelectionController, SelectionEvent, ALL_DEPARTMENTS, ALL_GROUPS,
};
use contracts::usecases::u502_legend::{DepartmentOption, Legend};
use leptos::prelude::*;

use crate::map::MapView;

/// Shared state of the viewer page.
///
/// The controller and the map are kept in stored values; the signals mirror
/// what the controls and the legend display.
#[derive(Clone, Copy)]
pub struct ViewerContext {
    controller: StoredValue<Option<SelectionController>>,
    map: StoredValue<Option<MapView>, LocalStorage>,
    /// `<select>` value of the department control
    pub department: RwSignal<String>,
    pub department_options: RwSignal<Vec<DepartmentOption>>,
    /// `<select>` value of the group control
    pub group: RwSignal<String>,
    pub group_options: RwSignal<Vec<String>>,
    pub toggles: RwSignal<FacilityToggles>,
    pub legend: RwSignal<Legend>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
}

impl ViewerContext {
    pub fn new() -> Self {
        Self {
            controller: StoredValue::new(None),
            map: StoredValue::new_local(None),
            department: RwSignal::new(ALL_DEPARTMENTS.to_string()),
            department_options: RwSignal::new(vec![]),
            group: RwSignal::new(ALL_GROUPS.to_string()),
            group_options: RwSignal::new(vec![]),
            toggles: RwSignal::new(FacilityToggles::default()),
            legend: RwSignal::new(Legend::default()),
            error: RwSignal::new(None),
            loading: RwSignal::new(true),
        }
    }

    pub fn has_map(&self) -> bool {
        self.map.with_value(|map| map.is_some())
    }

    pub fn attach_map(&self, map: MapView) {
        self.map.set_value(Some(map));
    }

    /// Hand the loaded dataset to a new controller and draw the first frame
    pub fn initialize(&self, dataset: Dataset, config: &ViewerConfig) {
        let (controller, plan) = SelectionController::initialize(dataset, config);

        let ctx = *self;
        let on_click = Callback::new(move |key: String| {
            ctx.dispatch(SelectionEvent::DepartmentClicked(key));
        });
        let hover_out = Callback::new(move |position: usize| {
            ctx.controller
                .with_value(|c| c.as_ref().map(|c| c.hover_out_style(position)))
                .unwrap_or_else(PathStyle::department_default)
        });

        self.map.update_value(|map| {
            if let Some(map) = map.as_mut() {
                map.draw_departments(controller.dataset().boundaries.departments(), on_click, hover_out);
            }
        });

        self.department_options.set(controller.department_options());
        self.controller.set_value(Some(controller));
        self.apply(plan);
        self.loading.set(false);
    }

    /// Route a UI event through the controller and apply the resulting plan
    pub fn dispatch(&self, event: SelectionEvent) {
        log::debug!("Selection event: {:?}", event);
        let plan = self
            .controller
            .try_update_value(|c| c.as_mut().and_then(|c| c.on_selection_change(event)))
            .flatten();

        if let Some(plan) = plan {
            self.apply(plan);
        }
    }

    pub fn fail(&self, message: String) {
        self.error.set(Some(message));
        self.loading.set(false);
    }

    fn apply(&self, plan: RenderPlan) {
        self.map.update_value(|map| {
            if let Some(map) = map.as_mut() {
                map.apply(&plan);
            }
        });

        let state = self.controller.with_value(|c| c.as_ref().map(|c| c.state().clone()));
        if let Some(state) = state {
            self.department.set(state.department.option_value());
            self.toggles.set(state.toggles);
        }
        self.group.set(plan.selected_group.option_value());
        self.group_options.set(plan.group_options);
        self.legend.set(plan.legend);
    }
}

/// Hook to use the viewer context.
pub fn use_viewer() -> ViewerContext {
    use_context::<ViewerContext>().expect("ViewerContext not found")
}
