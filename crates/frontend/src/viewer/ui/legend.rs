use contracts::usecases::u502_legend::LegendItem;
use leptos::prelude::*;

use crate::layout::global_context::use_viewer;

/// Legend panel: `ETC` and `IPS` sections, hidden while both are empty
#[component]
pub fn ViewerLegend() -> impl IntoView {
    let ctx = use_viewer();

    move || {
        let legend = ctx.legend.get();
        (!legend.is_empty()).then(|| {
            view! {
                <div id="legend" class="legend">
                    <LegendSection title="ETC" items=legend.groups />
                    <LegendSection title="IPS" items=legend.facilities />
                </div>
            }
        })
    }
}

#[component]
fn LegendSection(title: &'static str, items: Vec<LegendItem>) -> impl IntoView {
    view! {
        <h4 class="legend__title">{title}</h4>
        {items
            .into_iter()
            .map(|item| {
                view! {
                    <div class="legend__item">
                        <span
                            class="legend__swatch"
                            style=format!("background:{};", item.color)
                        ></span>
                        <span>{item.label}</span>
                    </div>
                }
            })
            .collect_view()}
    }
}
