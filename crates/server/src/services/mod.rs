//! Business-logic services.
//!
//! - [`auth`] - registration and login (the credential flow)
//! - [`token`] - signed session token issuance and verification

pub mod auth;
pub mod token;

pub use auth::{AuthError, AuthService, LoginOutcome, Registration};
pub use token::{Claims, TokenError, TokenIssuer};
