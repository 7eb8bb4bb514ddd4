use leptos::*;

/// Labelled text input bound to a signal.
#[component]
pub fn Field(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{ label }</span>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |e| on_input.call(event_target_value(&e))
            />
        </label>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    #[prop(default = 4)] rows: u32,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{ label }</span>
            <textarea
                rows=rows
                prop:value=move || value.get()
                on:input=move |e| on_input.call(event_target_value(&e))
            />
        </label>
    }
}
