use crate::components::{Flash, Layout};
use crate::format_date;
use analyzer_app::domain::{Url, UrlCheck};
use leptos::prelude::*;

/// Detail page: url info, the "run check" button and the history, newest first.
#[component]
pub fn UrlPage(flashes: Vec<Flash>, url: Url, checks: Vec<UrlCheck>) -> impl IntoView {
    let title = format!("{} - Page Analyzer", url.name);
    let heading = format!("Site: {}", url.name);
    let check_action = format!("/urls/{}/checks", url.id);
    let created_at = format_date(&url.created_at);

    let history = if checks.is_empty() {
        view! { <p class="empty">"No checks yet."</p> }.into_any()
    } else {
        view! {
            <table class="table" data-test="checks">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Status code"</th>
                        <th>"h1"</th>
                        <th>"title"</th>
                        <th>"description"</th>
                        <th>"Created at"</th>
                    </tr>
                </thead>
                <tbody>
                    {checks
                        .into_iter()
                        .map(|check| view! { <CheckRow check=check/> })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <Layout title=title flashes=flashes>
            <h1 class="page-title">{heading}</h1>
            <table class="table" data-test="url">
                <tbody>
                    <tr><th>"ID"</th><td>{url.id}</td></tr>
                    <tr><th>"Name"</th><td>{url.name}</td></tr>
                    <tr><th>"Created at"</th><td>{created_at}</td></tr>
                </tbody>
            </table>
            <h2 class="section-title">"Checks"</h2>
            <form action=check_action method="post" class="check-form">
                <button type="submit" class="check-form__button">"Run check"</button>
            </form>
            {history}
        </Layout>
    }
}

#[component]
fn CheckRow(check: UrlCheck) -> impl IntoView {
    let status = check.status_code.map(|code| code.to_string()).unwrap_or_default();

    view! {
        <tr>
            <td>{check.id}</td>
            <td>{status}</td>
            <td>{check.h1.unwrap_or_default()}</td>
            <td>{check.title.unwrap_or_default()}</td>
            <td>{check.description.unwrap_or_default()}</td>
            <td>{format_date(&check.created_at)}</td>
        </tr>
    }
}

pub fn render_url_page(flashes: &[Flash], url: &Url, checks: &[UrlCheck]) -> String {
    let flashes = flashes.to_vec();
    let url = url.clone();
    let checks = checks.to_vec();
    view! { <UrlPage flashes=flashes url=url checks=checks/> }.to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn url() -> Url {
        Url {
            id: 7,
            name: "https://example.com".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn shows_url_and_check_button() {
        let html = render_url_page(&[Flash::success("Page successfully added")], &url(), &[]);

        assert!(html.contains("Site: https://example.com"));
        assert!(html.contains(r#"action="/urls/7/checks""#));
        assert!(html.contains("Page successfully added"));
        assert!(html.contains("No checks yet."));
    }

    #[test]
    fn renders_history_with_escaped_fields() {
        let checks = vec![UrlCheck {
            id: 3,
            url_id: 7,
            status_code: Some(200),
            h1: Some("<script>alert(1)</script>".to_string()),
            title: Some("Home".to_string()),
            description: None,
            created_at: Utc::now(),
        }];
        let html = render_url_page(&[], &url(), &checks);

        assert!(html.contains(r#"data-test="checks""#));
        assert!(html.contains("<td>3</td>"));
        assert!(html.contains("<td>200</td>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("<td>Home</td>"));
        assert!(!html.contains("No checks yet."));
    }
}
