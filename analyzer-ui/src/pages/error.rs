use crate::components::{ErrorDisplay, Layout};
use leptos::prelude::*;

pub fn render_error_page(status: u16, message: &str) -> String {
    let message = message.to_string();
    view! {
        <Layout title="Error - Page Analyzer" flashes={Vec::new()}>
            <ErrorDisplay status=status message=message/>
        </Layout>
    }
    .to_html()
}
