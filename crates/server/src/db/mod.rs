//! Database operations.
//!
//! One repository per table, all queries parameterized. Row types are
//! internal to this module; handlers only ever see domain types.
//!
//! # Tables
//!
//! - `admin_account` - Admin credentials and profile (unique email)
//! - `toolkit` - Toolkit catalog
//! - `portfolio` - Portfolio catalog
//!
//! # Migrations
//!
//! Embedded from `crates/server/migrations/` and applied at startup.

pub mod admins;
pub mod portfolios;
pub mod toolkits;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use admins::AdminRepository;
pub use portfolios::PortfolioRepository;
pub use toolkits::ToolkitRepository;

/// Catalog listings are capped; the site never shows more.
pub(crate) const CATALOG_LIMIT: i64 = 20;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// The acquire timeout bounds how long a request can wait on the store
/// before failing; expiry surfaces to the caller as a retryable 500.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
