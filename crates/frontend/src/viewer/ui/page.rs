use contracts::shared::config::{load_config, ViewerConfig};
use contracts::shared::error::LoadError;
use contracts::usecases::u500_load_dataset::Dataset;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::controls::ViewerControls;
use super::legend::ViewerLegend;
use crate::layout::global_context::use_viewer;
use crate::layout::Shell;
use crate::map::MapView;
use crate::shared::api_utils::fetch_sources;

const LOAD_ERROR_MESSAGE: &str = "Error al cargar los datos. Por favor, intenta de nuevo.";

async fn load_dataset(config: &ViewerConfig) -> Result<Dataset, LoadError> {
    let texts = fetch_sources(&config.sources).await?;
    Dataset::from_sources(
        &texts.departments,
        &texts.municipalities,
        &texts.facilities,
        config,
    )
}

#[component]
pub fn ViewerPage() -> impl IntoView {
    let ctx = use_viewer();
    let map_ref = NodeRef::<leptos::html::Div>::new();

    // Карта создаётся один раз, как только контейнер смонтирован
    Effect::new(move |_| {
        let Some(element) = map_ref.get() else {
            return;
        };
        if ctx.has_map() {
            return;
        }

        let config = match load_config(None).map_err(LoadError::from) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                ctx.fail(LOAD_ERROR_MESSAGE.to_string());
                return;
            }
        };

        ctx.attach_map(MapView::new(&element, &config.view));

        spawn_local(async move {
            match load_dataset(&config).await {
                Ok(dataset) => ctx.initialize(dataset, &config),
                Err(e) => {
                    log::error!("Error cargando datos: {}", e);
                    ctx.fail(LOAD_ERROR_MESSAGE.to_string());
                }
            }
        });
    });

    view! {
        <Shell
            panel=move || view! {
                <ViewerControls />
                <ViewerLegend />
                <div id="error-message" class="error-message">
                    {move || ctx.error.get()}
                </div>
            }.into_any()
            map=move || view! { <div id="map" class="map" node_ref=map_ref></div> }.into_any()
        />
    }
}
