use super::entities::{urls, Urls};
use crate::domain::{Url, UrlWithLastCheck};
use chrono::{DateTime, Utc};
use sea_orm::{
    entity::*, query::*, ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult, Statement,
};

#[derive(Clone)]
pub struct UrlRepository {
    db: DatabaseConnection,
}

impl UrlRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<i32>, DbErr> {
        let model = Urls::find()
            .filter(urls::Column::Name.eq(name))
            .one(&self.db)
            .await?;
        Ok(model.map(|m| m.id))
    }

    /// Inserts a new url. A duplicate `name` fails with a unique violation.
    pub async fn insert(&self, name: &str, created_at: DateTime<Utc>) -> Result<i32, DbErr> {
        let active = urls::ActiveModel {
            name: Set(name.to_string()),
            created_at: Set(created_at),
            ..Default::default()
        };
        let model = active.insert(&self.db).await?;
        Ok(model.id)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Url>, DbErr> {
        Ok(Urls::find_by_id(id).one(&self.db).await?.map(Url::from))
    }

    /// All urls, newest first, each with its most recent check.
    pub async fn list_with_last_check(&self) -> Result<Vec<UrlWithLastCheck>, DbErr> {
        let backend = self.db.get_database_backend();
        let rows = ListingRow::find_by_statement(Statement::from_string(backend, LISTING_SQL))
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(UrlWithLastCheck::from).collect())
    }
}

// One round trip: each url is joined to its latest check (by `created_at`, then `id`).
const LISTING_SQL: &str = r#"
SELECT u.id, u.name, u.created_at,
       c.created_at AS last_check_at,
       c.status_code AS last_status_code
FROM urls u
LEFT JOIN url_checks c ON c.id = (
    SELECT lc.id FROM url_checks lc
    WHERE lc.url_id = u.id
    ORDER BY lc.created_at DESC, lc.id DESC
    LIMIT 1
)
ORDER BY u.id DESC
"#;

#[derive(Debug, FromQueryResult)]
struct ListingRow {
    id: i32,
    name: String,
    created_at: DateTime<Utc>,
    last_check_at: Option<DateTime<Utc>>,
    last_status_code: Option<i32>,
}

impl From<ListingRow> for UrlWithLastCheck {
    fn from(row: ListingRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
            last_check_at: row.last_check_at,
            last_status_code: row.last_status_code,
        }
    }
}
