use leptos::prelude::*;

/// The "add a site" form. `value` refills the input after a rejected submission.
#[component]
pub fn UrlForm(#[prop(into)] value: String, invalid: bool) -> impl IntoView {
    let input_class = if invalid {
        "url-form__input url-form__input--invalid"
    } else {
        "url-form__input"
    };

    view! {
        <form action="/urls" method="post" class="url-form" novalidate>
            <input
                type="url"
                name="url"
                class=input_class
                value=value
                placeholder="https://www.example.com"
                aria-label="URL"
                required
            />
            <button type="submit" class="url-form__button">
                "Check"
            </button>
        </form>
    }
}
