//! Authentication service.
//!
//! The credential flow: registration (hash + store) and login (lookup,
//! verify, issue token). Everything else in the backend is plain CRUD.

mod error;

pub use error::AuthError;

use sqlx::PgPool;

use atelier_core::{AdminId, Email};

use crate::db::RepositoryError;
use crate::db::admins::AdminRepository;
use crate::models::admin::AdminProfile;
use crate::services::token::TokenIssuer;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// bcrypt work factor (2^10 rounds). Raising it only affects new digests;
/// existing ones verify with the cost recorded in the digest itself.
const BCRYPT_COST: u32 = 10;

/// Registration input, validated by [`AuthService::register`].
#[derive(Debug)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub profile_picture: String,
    pub address: String,
    pub password: String,
}

/// Successful login: a fresh session token plus the account projection.
///
/// The projection type has no password-hash field, so the digest cannot leak
/// past verification.
#[derive(Debug)]
pub struct LoginOutcome {
    pub token: String,
    pub admin: AdminProfile,
}

/// Authentication service.
///
/// Handles admin registration and login against the credential store.
pub struct AuthService<'a> {
    admins: AdminRepository<'a>,
    tokens: &'a TokenIssuer,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool, tokens: &'a TokenIssuer) -> Self {
        Self {
            admins: AdminRepository::new(pool),
            tokens,
        }
    }

    /// Register a new admin account.
    ///
    /// Hashes the password and inserts the account row; uniqueness of the
    /// email is enforced by the store's unique index, not an application
    /// check, so concurrent registrations cannot race past it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingField` if any field is empty,
    /// `AuthError::InvalidEmail` / `AuthError::WeakPassword` on policy
    /// violations, and `AuthError::EmailTaken` if the email exists.
    pub async fn register(&self, input: &Registration) -> Result<AdminId, AuthError> {
        require("name", &input.name)?;
        require("adminEmail", &input.email)?;
        require("mobile", &input.mobile)?;
        require("profilePicture", &input.profile_picture)?;
        require("address", &input.address)?;
        require("adminPassword", &input.password)?;

        let email = Email::parse(&input.email)?;
        validate_password(&input.password)?;

        let password_hash = hash_password(&input.password)?;

        let id = self
            .admins
            .create(
                &input.name,
                &email,
                &input.mobile,
                &input.profile_picture,
                &input.address,
                &password_hash,
            )
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::EmailTaken,
                other => AuthError::Repository(other),
            })?;

        Ok(id)
    }

    /// Authenticate an admin and issue a session token.
    ///
    /// Unknown email and wrong password both fail with
    /// `AuthError::InvalidCredentials`; the two cases are indistinguishable
    /// to the caller.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` on any credential mismatch,
    /// `AuthError::Repository` / `AuthError::Token` on infrastructure
    /// failures.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        // A structurally invalid email cannot match any account; report it
        // the same way as an unknown one.
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let (admin, password_hash) = self
            .admins
            .get_with_password_hash(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(admin.id, &admin.email)?;

        Ok(LoginOutcome {
            token,
            admin: admin.into(),
        })
    }
}

/// Reject empty required fields.
fn require(field: &'static str, value: &str) -> Result<(), AuthError> {
    if value.trim().is_empty() {
        return Err(AuthError::MissingField(field));
    }
    Ok(())
}

/// Validate password meets the minimum policy.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password with a per-call random salt.
fn hash_password(password: &str) -> Result<String, AuthError> {
    bcrypt::hash(password, BCRYPT_COST).map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored digest.
///
/// A digest that cannot be parsed is data corruption, not a credential
/// mismatch, and surfaces as an internal error.
fn verify_password(password: &str, digest: &str) -> Result<bool, AuthError> {
    bcrypt::verify(password, digest).map_err(|_| AuthError::PasswordHash)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_never_the_plaintext() {
        let digest = hash_password("secret123").unwrap();
        assert_ne!(digest, "secret123");
        assert!(verify_password("secret123", &digest).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently() {
        // Per-call salt: two digests of the same password differ, both verify.
        let a = hash_password("secret123").unwrap();
        let b = hash_password("secret123").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("secret123", &a).unwrap());
        assert!(verify_password("secret123", &b).unwrap());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let digest = hash_password("secret123").unwrap();
        assert!(!verify_password("wrong", &digest).unwrap());
    }

    #[test]
    fn test_verify_surfaces_corrupt_digest_as_internal() {
        assert!(matches!(
            verify_password("secret123", "not-a-bcrypt-digest"),
            Err(AuthError::PasswordHash)
        ));
    }

    #[test]
    fn test_validate_password_minimum_length() {
        assert!(matches!(
            validate_password("short"),
            Err(AuthError::WeakPassword(_))
        ));
        assert!(validate_password("secret123").is_ok());
    }

    #[test]
    fn test_require_rejects_blank() {
        assert!(matches!(
            require("name", "   "),
            Err(AuthError::MissingField("name"))
        ));
        assert!(require("name", "A").is_ok());
    }
}
