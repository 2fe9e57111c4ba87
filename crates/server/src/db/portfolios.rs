//! Portfolio catalog repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use atelier_core::PortfolioId;

use super::{CATALOG_LIMIT, RepositoryError};
use crate::models::portfolio::Portfolio;

#[derive(Debug, sqlx::FromRow)]
struct PortfolioRow {
    id: i32,
    name: String,
    live_url: String,
    technologies: String,
    categories: String,
    thumbnail_url: String,
    full_page_url: String,
    created_at: DateTime<Utc>,
}

impl From<PortfolioRow> for Portfolio {
    fn from(row: PortfolioRow) -> Self {
        Self {
            id: PortfolioId::new(row.id),
            name: row.name,
            live_url: row.live_url,
            technologies: row.technologies,
            categories: row.categories,
            thumbnail_url: row.thumbnail_url,
            full_page_url: row.full_page_url,
            created_at: row.created_at,
        }
    }
}

/// Fields of a portfolio entry, shared by insert and update.
#[derive(Debug)]
pub struct PortfolioFields<'a> {
    pub name: &'a str,
    pub live_url: &'a str,
    pub technologies: &'a str,
    pub categories: &'a str,
    pub thumbnail_url: &'a str,
    pub full_page_url: &'a str,
}

/// Repository for portfolio catalog operations.
pub struct PortfolioRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PortfolioRepository<'a> {
    /// Create a new portfolio repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a portfolio entry and return its generated id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, fields: &PortfolioFields<'_>) -> Result<PortfolioId, RepositoryError> {
        let id = sqlx::query_scalar::<_, i32>(
            r"
            INSERT INTO portfolio (name, live_url, technologies, categories, thumbnail_url, full_page_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            ",
        )
        .bind(fields.name)
        .bind(fields.live_url)
        .bind(fields.technologies)
        .bind(fields.categories)
        .bind(fields.thumbnail_url)
        .bind(fields.full_page_url)
        .fetch_one(self.pool)
        .await?;

        Ok(PortfolioId::new(id))
    }

    /// List portfolio entries, newest first, capped at the catalog limit.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Portfolio>, RepositoryError> {
        let rows = sqlx::query_as::<_, PortfolioRow>(
            r"
            SELECT id, name, live_url, technologies, categories,
                   thumbnail_url, full_page_url, created_at
            FROM portfolio
            ORDER BY id DESC
            LIMIT $1
            ",
        )
        .bind(CATALOG_LIMIT)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Update a portfolio entry, returning the number of rows changed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: PortfolioId,
        fields: &PortfolioFields<'_>,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE portfolio
            SET name = $1, live_url = $2, technologies = $3, categories = $4,
                thumbnail_url = $5, full_page_url = $6
            WHERE id = $7
            ",
        )
        .bind(fields.name)
        .bind(fields.live_url)
        .bind(fields.technologies)
        .bind(fields.categories)
        .bind(fields.thumbnail_url)
        .bind(fields.full_page_url)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a portfolio entry, returning the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: PortfolioId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM portfolio WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
