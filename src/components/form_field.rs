//! Labelled input bound to one field of a form signal.

use leptos::prelude::*;

#[component]
pub fn TextField(
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    #[prop(into, default = "text".to_owned())] input_type: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    on_input: Callback<String>,
) -> impl IntoView {
    let id = name.clone();
    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <input
                type=input_type
                id=id
                name=name
                placeholder=placeholder
                class:error=move || error.get().is_some()
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! { <span class="error-message">{message}</span> })}
        </div>
    }
}
