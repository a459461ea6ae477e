use super::entities::{url_checks, UrlChecks};
use crate::domain::{NewUrlCheck, UrlCheck};
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr};

#[derive(Clone)]
pub struct CheckRepository {
    db: DatabaseConnection,
}

impl CheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(&self, check: NewUrlCheck) -> Result<UrlCheck, DbErr> {
        let active = url_checks::ActiveModel {
            url_id: Set(check.url_id),
            status_code: Set(check.status_code),
            h1: Set(check.seo.h1),
            title: Set(check.seo.title),
            description: Set(check.seo.description),
            created_at: Set(check.created_at),
            ..Default::default()
        };
        Ok(active.insert(&self.db).await?.into())
    }

    /// Check history of one url, most recent first.
    pub async fn list_for_url(&self, url_id: i32) -> Result<Vec<UrlCheck>, DbErr> {
        let checks = UrlChecks::find()
            .filter(url_checks::Column::UrlId.eq(url_id))
            .order_by_desc(url_checks::Column::CreatedAt)
            .order_by_desc(url_checks::Column::Id)
            .all(&self.db)
            .await?;
        Ok(checks.into_iter().map(UrlCheck::from).collect())
    }
}
