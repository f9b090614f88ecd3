use crate::layout::global_context::ViewerContext;
use crate::viewer::ui::ViewerPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the ViewerContext store to the whole app via context.
    provide_context(ViewerContext::new());

    view! {
        <ViewerPage />
    }
}
