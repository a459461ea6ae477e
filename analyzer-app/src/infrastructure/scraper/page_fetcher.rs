use analyzer_errors::AppError;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("page-analyzer/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: usize = 10;

/// Raw result of a GET: whatever status the site answered with, and its body.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

#[derive(Clone)]
pub struct PageFetcher {
    http_client: reqwest::Client,
}

impl PageFetcher {
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }

    /// Transport problems (DNS, refused connection, timeout, unreadable body)
    /// become `CheckFailed`. Any HTTP status, including errors, is a successful fetch.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, AppError> {
        let response = self
            .http_client
            .get(url)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .send()
            .await
            .map_err(|e| AppError::CheckFailed(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::CheckFailed(e.to_string()))?;

        Ok(FetchedPage { status, body })
    }
}
