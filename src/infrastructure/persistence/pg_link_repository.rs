//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkInput};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS enlaces (
        id    BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        url   TEXT NOT NULL
    )
"#;

/// PostgreSQL repository for the `enlaces` table.
///
/// Uses bound parameters for every statement; the pool handles concurrent
/// access.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(CREATE_TABLE)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as::<_, Link>("SELECT id, title, url FROM enlaces ORDER BY id DESC")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(links)
    }

    async fn create(&self, input: LinkInput) -> Result<Link, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO enlaces (title, url)
            VALUES ($1, $2)
            RETURNING id, title, url
            "#,
        )
        .bind(input.title())
        .bind(input.url())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>("SELECT id, title, url FROM enlaces WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(link)
    }

    async fn update(&self, id: i64, input: LinkInput) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE enlaces SET title = $1, url = $2 WHERE id = $3")
            .bind(input.title())
            .bind(input.url())
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM enlaces WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
