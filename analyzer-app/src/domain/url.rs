use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Listing row: a url plus a summary of its most recent check, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlWithLastCheck {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub last_check_at: Option<DateTime<Utc>>,
    pub last_status_code: Option<i32>,
}
