use leptos::prelude::*;

/// Labelled `<select>` whose first entry stands for "all"
#[component]
pub fn Select(
    /// Label text
    #[prop(into)]
    label: String,
    /// ID for the select element
    #[prop(into)]
    id: String,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler, receives the raw option value
    on_change: Callback<String>,
    /// Value and label of the leading "all" entry
    all_option: (&'static str, &'static str),
    /// Options: Vec of (value, label) tuples, without the "all" entry
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let (all_value, all_label) = all_option;

    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>
                {label}
            </label>
            <select
                id=id
                class="form__select"
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value=all_value prop:selected=move || value.get() == all_value>
                    {all_label}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val prop:selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
