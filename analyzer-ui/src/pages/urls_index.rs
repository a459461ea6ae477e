use crate::components::{Flash, Layout};
use crate::format_date;
use analyzer_app::domain::UrlWithLastCheck;
use leptos::prelude::*;

#[component]
pub fn UrlsPage(flashes: Vec<Flash>, urls: Vec<UrlWithLastCheck>) -> impl IntoView {
    let body = if urls.is_empty() {
        view! { <p class="empty">"No sites yet. Add one on the home page."</p> }.into_any()
    } else {
        view! {
            <table class="table" data-test="urls">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Last check"</th>
                        <th>"Status code"</th>
                    </tr>
                </thead>
                <tbody>
                    {urls.into_iter().map(|url| view! { <UrlRow url=url/> }).collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <Layout title="Sites - Page Analyzer" flashes=flashes>
            <h1 class="page-title">"Sites"</h1>
            {body}
        </Layout>
    }
}

#[component]
fn UrlRow(url: UrlWithLastCheck) -> impl IntoView {
    let href = format!("/urls/{}", url.id);
    let checked = url.last_check_at.as_ref().map(format_date).unwrap_or_default();
    let status = url
        .last_status_code
        .map(|code| code.to_string())
        .unwrap_or_default();

    view! {
        <tr>
            <td>{url.id}</td>
            <td><a href=href>{url.name}</a></td>
            <td>{checked}</td>
            <td>{status}</td>
        </tr>
    }
}

pub fn render_urls_page(flashes: &[Flash], urls: &[UrlWithLastCheck]) -> String {
    let flashes = flashes.to_vec();
    let urls = urls.to_vec();
    view! { <UrlsPage flashes=flashes urls=urls/> }.to_html()
}
