use crate::domain::{NewUrlCheck, UrlCheck};
use crate::infrastructure::db::{db_error, CheckRepository, UrlRepository};
use crate::infrastructure::scraper::{extract_seo, PageFetcher};
use analyzer_errors::AppError;

/// Responses at or above this status are not recorded.
const SERVER_ERROR_STATUS: u16 = 500;

pub struct RunCheck {
    urls: UrlRepository,
    checks: CheckRepository,
    fetcher: PageFetcher,
}

impl RunCheck {
    pub fn new(urls: UrlRepository, checks: CheckRepository, fetcher: PageFetcher) -> Self {
        Self {
            urls,
            checks,
            fetcher,
        }
    }

    /// Fetches the stored url and appends a check. Transport failures and 5xx
    /// answers return `CheckFailed` without writing anything.
    pub async fn execute(&self, url_id: i32) -> Result<UrlCheck, AppError> {
        let url = self
            .urls
            .find_by_id(url_id)
            .await
            .map_err(db_error)?
            .ok_or(AppError::NotFound)?;

        let page = self.fetcher.fetch(&url.name).await.map_err(|e| {
            tracing::warn!(url_id, url = %url.name, "Check failed: {}", e);
            e
        })?;

        if page.status >= SERVER_ERROR_STATUS {
            tracing::warn!(url_id, url = %url.name, status = page.status, "Check failed: server error");
            return Err(AppError::CheckFailed(format!("HTTP {}", page.status)));
        }

        let seo = extract_seo(&page.body);
        let check = self
            .checks
            .insert(NewUrlCheck::new(url.id, page.status, seo))
            .await
            .map_err(db_error)?;

        tracing::info!(url_id, check_id = check.id, status = page.status, "Check recorded");
        Ok(check)
    }
}
