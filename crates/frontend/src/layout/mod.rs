pub mod global_context;

use leptos::prelude::*;

/// Page shell of the viewer.
///
/// ```text
/// +-----------+------------------------------+
/// |  Panel    |                              |
/// | (controls |            Map               |
/// |  legend)  |                              |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell<P, M>(panel: P, map: M) -> impl IntoView
where
    P: Fn() -> AnyView + 'static + Send,
    M: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <aside class="app-panel">
                <h1 class="app-panel__title">"IPS por departamento"</h1>
                {panel()}
            </aside>
            <main class="app-main">
                {map()}
            </main>
        </div>
    }
}
