//! Authenticated user record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::email::Email;
use super::id::UserId;

/// An editor account as returned by the auth endpoints.
///
/// The identity endpoints return this shape inside `{"user": ...}`; the
/// sign-in and registration exchanges return it next to the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_auth_shape() {
        let json = r#"{
            "id": "0a8ef3f6-2f0b-4a5e-9c8e-8a24d1f0b9aa",
            "email": "editor@example.com",
            "created_at": "2025-01-01T00:00:00Z"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.email.as_str(), "editor@example.com");
    }
}
