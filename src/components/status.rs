//! Loading and error placeholders shared by every data-driven screen.

use leptos::prelude::*;

pub const DEFAULT_LOADING_MESSAGE: &str = "로딩 중...";

#[component]
pub fn LoadingSpinner(#[prop(into, default = DEFAULT_LOADING_MESSAGE.to_owned())] message: String) -> impl IntoView {
    view! {
        <div class="loading-spinner">
            <div class="spinner"></div>
            <p class="loading-message">{message}</p>
        </div>
    }
}

/// Error banner with an optional manual retry button.
#[component]
pub fn ErrorMessage(
    #[prop(into)] message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
    #[prop(into, default = "다시 시도".to_owned())] retry_text: String,
) -> impl IntoView {
    view! {
        <div class="error-message-container">
            <div class="error-message">
                <p>{message}</p>
                {on_retry.map(|retry| {
                    view! {
                        <button class="retry-button" on:click=move |_| retry.run(())>
                            {retry_text}
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
