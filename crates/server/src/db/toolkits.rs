//! Toolkit catalog repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use atelier_core::ToolkitId;

use super::{CATALOG_LIMIT, RepositoryError};
use crate::models::toolkit::Toolkit;

#[derive(Debug, sqlx::FromRow)]
struct ToolkitRow {
    id: i32,
    name: String,
    image_url: String,
    created_at: DateTime<Utc>,
}

impl From<ToolkitRow> for Toolkit {
    fn from(row: ToolkitRow) -> Self {
        Self {
            id: ToolkitId::new(row.id),
            name: row.name,
            image_url: row.image_url,
            created_at: row.created_at,
        }
    }
}

/// Repository for toolkit catalog operations.
pub struct ToolkitRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ToolkitRepository<'a> {
    /// Create a new toolkit repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a toolkit entry and return its generated id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, name: &str, image_url: &str) -> Result<ToolkitId, RepositoryError> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO toolkit (name, image_url) VALUES ($1, $2) RETURNING id",
        )
        .bind(name)
        .bind(image_url)
        .fetch_one(self.pool)
        .await?;

        Ok(ToolkitId::new(id))
    }

    /// List toolkit entries, newest first, capped at the catalog limit.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Toolkit>, RepositoryError> {
        let rows = sqlx::query_as::<_, ToolkitRow>(
            "SELECT id, name, image_url, created_at FROM toolkit ORDER BY id DESC LIMIT $1",
        )
        .bind(CATALOG_LIMIT)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Update a toolkit entry, returning the number of rows changed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: ToolkitId,
        name: &str,
        image_url: &str,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query("UPDATE toolkit SET name = $1, image_url = $2 WHERE id = $3")
            .bind(name)
            .bind(image_url)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete a toolkit entry, returning the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ToolkitId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM toolkit WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
