use contracts::domain::a001_facility_network::FacilityCategory;
use contracts::usecases::u501_selection::{
    DepartmentSelection, GroupFilter, SelectionEvent, ALL_DEPARTMENTS, ALL_GROUPS,
};
use leptos::prelude::*;

use crate::layout::global_context::use_viewer;
use crate::shared::components::ui::{Checkbox, Select};

#[component]
pub fn ViewerControls() -> impl IntoView {
    let ctx = use_viewer();

    let department_options = Signal::derive(move || {
        ctx.department_options
            .get()
            .into_iter()
            .map(|o| (o.key, o.label))
            .collect::<Vec<_>>()
    });
    let group_options = Signal::derive(move || {
        ctx.group_options
            .get()
            .into_iter()
            .map(|g| (g.clone(), g))
            .collect::<Vec<_>>()
    });
    // фильтр ETC имеет смысл только внутри департамента
    let group_disabled =
        Signal::derive(move || ctx.loading.get() || ctx.department.get() == ALL_DEPARTMENTS);

    let on_department = Callback::new(move |value: String| {
        let selection = DepartmentSelection::from_option_value(&value);
        ctx.dispatch(SelectionEvent::DepartmentChanged(selection));
    });
    let on_group = Callback::new(move |value: String| {
        ctx.dispatch(SelectionEvent::GroupChanged(GroupFilter::from_option_value(&value)));
    });

    view! {
        <div class="viewer-controls">
            <Select
                label="Departamento"
                id="select-dpto"
                value=ctx.department
                on_change=on_department
                all_option=(ALL_DEPARTMENTS, "— Todos los departamentos —")
                options=department_options
                disabled=ctx.loading
            />
            <Select
                label="ETC"
                id="select-etc"
                value=ctx.group
                on_change=on_group
                all_option=(ALL_GROUPS, "— Todos —")
                options=group_options
                disabled=group_disabled
            />
            <div class="viewer-controls__toggles">
                {FacilityCategory::all()
                    .into_iter()
                    .map(|category| view! { <FacilityToggle category=category /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn FacilityToggle(category: FacilityCategory) -> impl IntoView {
    let ctx = use_viewer();
    let checked = Signal::derive(move || ctx.toggles.get().is_enabled(category));
    let on_change = Callback::new(move |enabled: bool| {
        ctx.dispatch(SelectionEvent::FacilityToggled(category, enabled));
    });

    view! {
        <Checkbox
            label=category.code()
            id=format!("toggle-{}", category.code().to_lowercase())
            checked=checked
            on_change=on_change
            disabled=ctx.loading
        />
    }
}
