//! Authentication error types.

use thiserror::Error;

use atelier_core::EmailError;

use crate::db::RepositoryError;
use crate::services::token::TokenError;

/// Errors from the registration and login flows.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required field is missing or empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The email address is structurally invalid.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The password does not meet the minimum policy.
    #[error("{0}")]
    WeakPassword(String),

    /// The email is already registered.
    #[error("email already registered")]
    EmailTaken,

    /// Login failed. Deliberately covers both unknown email and wrong
    /// password so callers cannot enumerate accounts.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password hashing failed. Internal, not a validation error.
    #[error("password hashing failed")]
    PasswordHash,

    /// Token issuance failed.
    #[error("token error: {0}")]
    Token(#[from] TokenError),

    /// Credential store failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
