//! Session token issuance and verification.
//!
//! Tokens are self-contained HS256 JWTs binding an admin identity to a claim
//! set with a fixed expiry. They are verifiable by any holder of the signing
//! secret without a database round-trip; there is no server-side revocation
//! list.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use atelier_core::{AdminId, Email};

/// Default token lifetime: one hour.
const DEFAULT_TTL_SECONDS: i64 = 60 * 60;

/// Errors from token verification or issuance.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token's expiry is in the past.
    #[error("token expired")]
    Expired,

    /// The signature does not match the configured secret.
    #[error("invalid token signature")]
    InvalidSignature,

    /// The token is structurally invalid (wrong segment count, bad base64, ...).
    #[error("malformed token: {0}")]
    Malformed(jsonwebtoken::errors::Error),

    /// Signing failed. Internal error, never caused by client input.
    #[error("token creation failed: {0}")]
    Creation(jsonwebtoken::errors::Error),
}

/// The identity data embedded in a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Admin account id.
    pub sub: i32,
    /// Admin email at time of issuance.
    pub email: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

impl Claims {
    /// The admin account id these claims assert.
    #[must_use]
    pub const fn admin_id(&self) -> AdminId {
        AdminId::new(self.sub)
    }
}

/// Issues and verifies signed session tokens.
///
/// Holds the derived keys so the secret is read from configuration exactly
/// once at startup.
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer with the default one-hour token lifetime.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        Self::with_ttl(secret, Duration::seconds(DEFAULT_TTL_SECONDS))
    }

    /// Create an issuer with an explicit token lifetime.
    #[must_use]
    pub fn with_ttl(secret: &SecretString, ttl: Duration) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
            ttl,
        }
    }

    /// Issue a fresh token bound to an admin identity.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Creation` if signing fails.
    pub fn issue(&self, admin_id: AdminId, email: &Email) -> Result<String, TokenError> {
        let expiry = Utc::now() + self.ttl;
        let claims = Claims {
            sub: admin_id.as_i32(),
            email: email.as_str().to_owned(),
            exp: expiry.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(TokenError::Creation)
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Expired` if the expiry has passed,
    /// `TokenError::InvalidSignature` if the signature doesn't match, and
    /// `TokenError::Malformed` for anything else.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed(e),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_secret() -> SecretString {
        SecretString::from("0123456789abcdef0123456789abcdef")
    }

    fn test_email() -> Email {
        Email::parse("admin@example.com").unwrap()
    }

    #[test]
    fn test_issue_produces_three_segments() {
        let issuer = TokenIssuer::new(&test_secret());
        let token = issuer.issue(AdminId::new(1), &test_email()).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_verify_roundtrip_carries_identity() {
        let issuer = TokenIssuer::new(&test_secret());
        let token = issuer.issue(AdminId::new(17), &test_email()).unwrap();

        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.sub, 17);
        assert_eq!(claims.admin_id(), AdminId::new(17));
        assert_eq!(claims.email, "admin@example.com");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        // Two hours in the past clears the default 60s validation leeway.
        let issuer = TokenIssuer::with_ttl(&test_secret(), Duration::hours(-2));
        let token = issuer.issue(AdminId::new(1), &test_email()).unwrap();

        assert!(matches!(issuer.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let issuer = TokenIssuer::new(&test_secret());
        let other = TokenIssuer::new(&SecretString::from("another-secret-another-secret-ab"));

        let token = issuer.issue(AdminId::new(1), &test_email()).unwrap();
        assert!(matches!(
            other.verify(&token),
            Err(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let issuer = TokenIssuer::new(&test_secret());
        assert!(matches!(
            issuer.verify("not-a-token"),
            Err(TokenError::Malformed(_))
        ));
    }

    #[test]
    fn test_tokens_are_fresh_per_issue() {
        let issuer = TokenIssuer::new(&test_secret());
        let a = issuer.issue(AdminId::new(1), &test_email()).unwrap();
        let b = issuer
            .issue(AdminId::new(2), &Email::parse("other@example.com").unwrap())
            .unwrap();
        assert_ne!(a, b);
    }
}
