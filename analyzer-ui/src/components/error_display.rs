use leptos::prelude::*;

#[component]
pub fn ErrorDisplay(status: u16, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error">
            <p class="error__title">{format!("Error {status}")}</p>
            <p class="error__message">{message}</p>
            <a href="/" class="error__retry">"Back to home"</a>
        </div>
    }
}
