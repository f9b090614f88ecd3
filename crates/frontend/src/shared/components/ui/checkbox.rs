use leptos::prelude::*;

/// Checkbox with a trailing label
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: String,
    /// ID for the checkbox element
    #[prop(into)]
    id: String,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    on_change: Callback<bool>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let wrapper_class = move || {
        if disabled.get() {
            "form__checkbox-wrapper form__checkbox-wrapper--disabled"
        } else {
            "form__checkbox-wrapper"
        }
    };

    view! {
        <div class=wrapper_class>
            <input
                id=id.clone()
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <label class="form__checkbox-label" for=id>
                {label}
            </label>
        </div>
    }
}
