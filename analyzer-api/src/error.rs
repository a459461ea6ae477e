use analyzer_errors::AppError;
use analyzer_ui::render_error_page;
use axum::response::{Html, IntoResponse, Response};

/// Renders an `AppError` as an HTML error page with the matching status.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        let html = render_error_page(status.as_u16(), self.0.user_message());
        (status, Html(html)).into_response()
    }
}
