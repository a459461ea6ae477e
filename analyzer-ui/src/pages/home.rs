use crate::components::{Flash, FlashKind, Layout, UrlForm};
use leptos::prelude::*;

#[component]
pub fn HomePage(flashes: Vec<Flash>, #[prop(into)] submitted: String) -> impl IntoView {
    let invalid = flashes.iter().any(|f| f.kind == FlashKind::Danger);

    view! {
        <Layout title="Page Analyzer" flashes=flashes>
            <div class="hero">
                <h1 class="hero__title">"Page Analyzer"</h1>
                <p class="hero__subtitle">
                    "Check any website for basic SEO signals: status code, h1, title and description."
                </p>
            </div>
            <UrlForm value=submitted invalid=invalid/>
        </Layout>
    }
}

/// Landing page. `submitted` refills the form after a rejected submission.
pub fn render_home_page(flashes: &[Flash], submitted: &str) -> String {
    let flashes = flashes.to_vec();
    let submitted = submitted.to_string();
    view! { <HomePage flashes=flashes submitted=submitted/> }.to_html()
}
