use leptos::prelude::*;

/// Full-page message shown when the catalogue could not be loaded.
#[component]
pub fn ErrorScreen(#[prop(into)] title: String, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-screen" role="alert">
            <h1 class="error-screen__title">{title}</h1>
            <pre class="error-screen__message">{message}</pre>
        </div>
    }
}
