use crate::infrastructure::db::{db_error, UrlRepository};
use crate::infrastructure::input::{normalize_url, UrlValidator};
use analyzer_errors::AppError;
use sea_orm::SqlErr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddUrlOutcome {
    Created(i32),
    AlreadyExists(i32),
}

impl AddUrlOutcome {
    pub fn id(&self) -> i32 {
        match self {
            Self::Created(id) | Self::AlreadyExists(id) => *id,
        }
    }
}

pub struct AddUrl {
    urls: UrlRepository,
}

impl AddUrl {
    pub fn new(urls: UrlRepository) -> Self {
        Self { urls }
    }

    pub async fn execute(&self, raw_url: &str) -> Result<AddUrlOutcome, AppError> {
        let parsed = UrlValidator::validate(raw_url)?;
        let name = normalize_url(&parsed);

        if let Some(id) = self.urls.find_by_name(&name).await.map_err(db_error)? {
            tracing::info!(url_id = id, name = %name, "Url already registered");
            return Ok(AddUrlOutcome::AlreadyExists(id));
        }

        match self.urls.insert(&name, chrono::Utc::now()).await {
            Ok(id) => {
                tracing::info!(url_id = id, name = %name, "Url registered");
                Ok(AddUrlOutcome::Created(id))
            }
            // Lost a race with a concurrent insert of the same name.
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                let id = self
                    .urls
                    .find_by_name(&name)
                    .await
                    .map_err(db_error)?
                    .ok_or_else(|| db_error(err))?;
                Ok(AddUrlOutcome::AlreadyExists(id))
            }
            Err(err) => Err(db_error(err)),
        }
    }
}
