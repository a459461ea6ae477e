use crate::domain::SeoData;
use scraper::{Html, Selector};

/// Pulls the SEO fields out of an HTML document. html5ever recovers from any
/// malformed input, so there is no failure case: missing tags become `None`.
pub fn extract_seo(html: &str) -> SeoData {
    let document = Html::parse_document(html);

    SeoData::default()
        .with_h1(first_text(&document, "h1"))
        .with_title(first_text(&document, "title"))
        .with_description(meta_description(&document))
}

fn first_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

fn meta_description(document: &Html) -> Option<String> {
    let selector = Selector::parse("meta[name='description']").ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
