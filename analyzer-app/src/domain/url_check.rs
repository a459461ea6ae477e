use super::SeoData;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlCheck {
    pub id: i32,
    pub url_id: i32,
    pub status_code: Option<i32>,
    pub h1: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A check that has been performed but not stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlCheck {
    pub url_id: i32,
    pub status_code: Option<i32>,
    pub seo: SeoData,
    pub created_at: DateTime<Utc>,
}

impl NewUrlCheck {
    pub fn new(url_id: i32, status_code: u16, seo: SeoData) -> Self {
        Self {
            url_id,
            status_code: Some(i32::from(status_code)),
            seo,
            created_at: Utc::now(),
        }
    }
}
