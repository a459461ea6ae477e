#![allow(dead_code)]

use analyzer_app::infrastructure::db::{create_connection, create_schema};
use analyzer_app::AppContext;
use sea_orm::DatabaseConnection;
use std::sync::Once;
use std::time::Duration;

static INIT_TRACING: Once = Once::new();

pub fn init_test_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "warn".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// A fresh in-memory database. One connection, so every query sees the same data.
pub async fn test_db() -> DatabaseConnection {
    init_test_tracing();
    let db = create_connection("sqlite::memory:", 1)
        .await
        .expect("connect to sqlite");
    create_schema(&db).await.expect("create schema");
    db
}

pub async fn test_context(check_timeout: Duration) -> AppContext {
    AppContext::new(test_db().await, check_timeout).expect("build context")
}

/// Registers a url under the given name, skipping validation (mock servers live on 127.0.0.1).
pub async fn register(ctx: &AppContext, name: &str) -> i32 {
    ctx.url_repo
        .insert(name, chrono::Utc::now())
        .await
        .expect("insert url")
}
