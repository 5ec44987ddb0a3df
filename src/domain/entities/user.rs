//! User account entities.

use serde::{Deserialize, Serialize};

/// Authenticated user profile.
///
/// The backend returns the identity under `id` from the login endpoint and
/// under `user_id` from /users/me; both decode into the same field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-side user identity.
    #[serde(alias = "user_id")]
    pub id: i64,
    /// Account username.
    pub username: String,
    /// Account email, present on own-profile responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Account role (listener, creator, admin).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Profile image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// Response from the login and register endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Session bearer token.
    pub token: String,
    /// The authenticated user.
    pub user: User,
}

/// A user in a followers or following list.
#[derive(Debug, Clone, Deserialize)]
pub struct FollowUser {
    /// Server-side user identity.
    pub user_id: i64,
    /// Account username.
    pub username: String,
    /// Account email, when visible.
    #[serde(default)]
    pub email: Option<String>,
}

/// Response from the profile image upload endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileImageUpload {
    /// URL of the stored profile image.
    pub profile_image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_decodes_primary_id_field() {
        let user: User = serde_json::from_str(r#"{"id": 7, "username": "ada"}"#).unwrap();
        assert_eq!(user.id, 7);
    }

    #[test]
    fn test_user_decodes_fallback_id_field() {
        let user: User =
            serde_json::from_str(r#"{"user_id": 9, "username": "grace"}"#).unwrap();
        assert_eq!(user.id, 9);
        assert_eq!(user.username, "grace");
    }

    #[test]
    fn test_user_optional_fields_default_to_none() {
        let user: User = serde_json::from_str(r#"{"id": 1, "username": "sam"}"#).unwrap();
        assert!(user.email.is_none());
        assert!(user.role.is_none());
        assert!(user.profile_image.is_none());
    }

    #[test]
    fn test_login_response_decodes_token_and_user() {
        let json = r#"{"token": "abc.def.ghi", "user": {"id": 4, "username": "nia"}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "abc.def.ghi");
        assert_eq!(response.user.id, 4);
    }
}
