//! Server-rendered pages for the analyzer.
//!
//! Pages are Leptos components rendered straight to HTML strings; there is no
//! client bundle, every interaction is a plain form post.

pub mod components;
pub mod pages;

pub use components::{Flash, FlashKind};
pub use pages::{render_error_page, render_home_page, render_url_page, render_urls_page};

fn format_date(at: &chrono::DateTime<chrono::Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}
