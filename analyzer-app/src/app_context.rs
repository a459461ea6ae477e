use crate::application::{AddUrl, RunCheck};
use crate::config::AppConfig;
use crate::infrastructure::db::{self, CheckRepository, UrlRepository};
use crate::infrastructure::scraper::PageFetcher;
use analyzer_errors::AppError;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppContext {
    pub add_url: Arc<AddUrl>,
    pub run_check: Arc<RunCheck>,
    pub url_repo: UrlRepository,
    pub check_repo: CheckRepository,
}

impl AppContext {
    pub fn new(db: DatabaseConnection, check_timeout: Duration) -> Result<Self, AppError> {
        let url_repo = UrlRepository::new(db.clone());
        let check_repo = CheckRepository::new(db);
        let fetcher = PageFetcher::new(check_timeout)?;

        Ok(Self {
            add_url: Arc::new(AddUrl::new(url_repo.clone())),
            run_check: Arc::new(RunCheck::new(url_repo.clone(), check_repo.clone(), fetcher)),
            url_repo,
            check_repo,
        })
    }

    /// Connects to the database, makes sure the schema exists and wires the use cases.
    pub async fn connect(config: &AppConfig) -> Result<Self, AppError> {
        let conn = db::create_connection(&config.database_url, config.database_max_connections)
            .await
            .map_err(db::db_error)?;
        db::create_schema(&conn).await.map_err(db::db_error)?;

        tracing::info!("Connected to database");
        Self::new(conn, config.check_timeout)
    }
}
