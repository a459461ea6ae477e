pub mod entities;
mod check_repository;
mod url_repository;

pub use check_repository::CheckRepository;
pub use url_repository::UrlRepository;

use analyzer_errors::AppError;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use std::time::Duration;

pub async fn create_connection(
    database_url: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .sqlx_logging(false);

    Database::connect(opt).await
}

/// Creates the `urls` and `url_checks` tables (and the `url_id` index) from the
/// entity definitions. Safe to run on every start.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut urls = schema.create_table_from_entity(entities::Urls);
    urls.if_not_exists();
    db.execute(backend.build(&urls)).await?;

    let mut checks = schema.create_table_from_entity(entities::UrlChecks);
    checks.if_not_exists();
    db.execute(backend.build(&checks)).await?;

    for mut index in schema.create_index_from_entity(entities::UrlChecks) {
        index.if_not_exists();
        db.execute(backend.build(&index)).await?;
    }

    tracing::info!("Database schema ready");
    Ok(())
}

pub fn db_error(err: DbErr) -> AppError {
    tracing::error!("Database error: {}", err);
    AppError::Database(err.to_string())
}
