//! Admin account domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use atelier_core::{AdminId, Email};

/// An admin account (domain type).
///
/// Deliberately carries no password hash; the digest only exists inside the
/// repository's verification path and never crosses this boundary.
#[derive(Debug, Clone)]
pub struct Admin {
    /// Unique account ID.
    pub id: AdminId,
    /// Display name.
    pub name: String,
    /// Email address (unique, case-sensitive).
    pub email: Email,
    /// Mobile number.
    pub mobile: String,
    /// Profile picture URL or opaque reference.
    pub profile_picture: String,
    /// Postal address.
    pub address: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// The account projection returned to API clients.
///
/// This is the only admin shape that is ever serialized; it has no
/// password-hash field by construction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub id: AdminId,
    pub name: String,
    pub email: Email,
    pub mobile: String,
    pub profile_picture: String,
    pub address: String,
}

impl From<Admin> for AdminProfile {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            name: admin.name,
            email: admin.email,
            mobile: admin.mobile,
            profile_picture: admin.profile_picture,
            address: admin.address,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Admin {
        Admin {
            id: AdminId::new(1),
            name: "A".to_owned(),
            email: Email::parse("a@x.com").unwrap(),
            mobile: "1".to_owned(),
            profile_picture: "https://cdn.example.com/a.png".to_owned(),
            address: "x".to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_profile_serialization_uses_camel_case() {
        let profile: AdminProfile = sample().into();
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"profilePicture\""));
        assert!(json.contains("\"a@x.com\""));
    }

    #[test]
    fn test_profile_never_contains_a_password_field() {
        let profile: AdminProfile = sample().into();
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.to_lowercase().contains("password"));
        assert!(!json.to_lowercase().contains("hash"));
    }
}
