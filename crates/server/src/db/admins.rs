//! Admin account repository.
//!
//! The password hash stays inside this module and the login verification
//! path: [`AdminRepository::get_with_password_hash`] is the only query that
//! selects it, and no domain type carries it.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use atelier_core::{AdminId, Email};

use super::RepositoryError;
use crate::models::admin::Admin;

// =============================================================================
// Internal Row Types
// =============================================================================

/// Row type for admin account queries (no password hash).
#[derive(Debug, sqlx::FromRow)]
struct AdminRow {
    id: i32,
    name: String,
    email: String,
    mobile: String,
    profile_picture: String,
    address: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AdminRow> for Admin {
    type Error = RepositoryError;

    fn try_from(row: AdminRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: AdminId::new(row.id),
            name: row.name,
            email,
            mobile: row.mobile,
            profile_picture: row.profile_picture,
            address: row.address,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Row type for the login lookup; the only place the hash is selected.
#[derive(Debug, sqlx::FromRow)]
struct AdminCredentialRow {
    id: i32,
    name: String,
    email: String,
    mobile: String,
    profile_picture: String,
    address: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

const ADMIN_COLUMNS: &str =
    "id, name, email, mobile, profile_picture, address, created_at, updated_at";

// =============================================================================
// Repository
// =============================================================================

/// Repository for admin account database operations.
pub struct AdminRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminRepository<'a> {
    /// Create a new admin repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new admin account and return its generated id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists
    /// (unique index violation).
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        name: &str,
        email: &Email,
        mobile: &str,
        profile_picture: &str,
        address: &str,
        password_hash: &str,
    ) -> Result<AdminId, RepositoryError> {
        let id = sqlx::query_scalar::<_, i32>(
            r"
            INSERT INTO admin_account (name, email, mobile, profile_picture, address, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            ",
        )
        .bind(name)
        .bind(email)
        .bind(mobile)
        .bind(profile_picture)
        .bind(address)
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(AdminId::new(id))
    }

    /// List all admin accounts, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list_all(&self) -> Result<Vec<Admin>, RepositoryError> {
        let rows = sqlx::query_as::<_, AdminRow>(&format!(
            "SELECT {ADMIN_COLUMNS} FROM admin_account ORDER BY id DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get an account and its password hash by exact email match.
    ///
    /// Returns `None` if no account has this email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_with_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(Admin, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminCredentialRow>(
            r"
            SELECT id, name, email, mobile, profile_picture, address,
                   password_hash, created_at, updated_at
            FROM admin_account
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        let Some(r) = row else {
            return Ok(None);
        };

        let parsed = Email::parse(&r.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        let admin = Admin {
            id: AdminId::new(r.id),
            name: r.name,
            email: parsed,
            mobile: r.mobile,
            profile_picture: r.profile_picture,
            address: r.address,
            created_at: r.created_at,
            updated_at: r.updated_at,
        };

        Ok(Some((admin, r.password_hash)))
    }

    /// Update an account's mutable profile fields and return the new row.
    ///
    /// Email and password are deliberately not updatable here.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the account doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_profile(
        &self,
        id: AdminId,
        name: &str,
        mobile: &str,
        profile_picture: &str,
        address: &str,
    ) -> Result<Admin, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(&format!(
            r"
            UPDATE admin_account
            SET name = $1, mobile = $2, profile_picture = $3, address = $4, updated_at = now()
            WHERE id = $5
            RETURNING {ADMIN_COLUMNS}
            "
        ))
        .bind(name)
        .bind(mobile)
        .bind(profile_picture)
        .bind(address)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    /// Delete an account by id, returning the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: AdminId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM admin_account WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[sqlx::test]
    async fn test_update_profile_on_missing_id_is_not_found(pool: PgPool) {
        let repo = AdminRepository::new(&pool);

        let result = repo
            .update_profile(AdminId::new(9999), "Ada", "123456", "pic", "addr")
            .await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[sqlx::test]
    async fn test_create_then_lookup_roundtrips(pool: PgPool) {
        let repo = AdminRepository::new(&pool);
        let email = Email::parse("ada@example.com").unwrap();

        let id = repo
            .create("Ada", &email, "123456", "pic", "addr", "digest")
            .await
            .unwrap();

        let (admin, hash) = repo.get_with_password_hash(&email).await.unwrap().unwrap();
        assert_eq!(admin.id, id);
        assert_eq!(admin.email, email);
        assert_eq!(hash, "digest");
    }

    #[sqlx::test]
    async fn test_duplicate_email_is_conflict(pool: PgPool) {
        let repo = AdminRepository::new(&pool);
        let email = Email::parse("ada@example.com").unwrap();

        repo.create("Ada", &email, "123456", "pic", "addr", "digest")
            .await
            .unwrap();

        let result = repo
            .create("Other", &email, "654321", "pic2", "addr2", "digest2")
            .await;

        assert!(matches!(result, Err(RepositoryError::Conflict(_))));
    }
}
