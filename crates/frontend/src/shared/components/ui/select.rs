use leptos::prelude::*;

/// Select component with label support
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    on_change: Callback<String>,
    /// Options: (value, label) pairs
    options: Vec<(String, String)>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class=move || format!("form__select {}", additional_class())
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options.into_iter().map(|(val, label)| {
                    let val_clone = val.clone();
                    let is_selected = move || value.get() == val_clone;
                    view! {
                        <option value=val selected=is_selected>
                            {label}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
