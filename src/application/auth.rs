//! Login and session lifecycle.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::entities::{AuthToken, LoginResponse, User};
use crate::domain::errors::ApiError;
use crate::domain::ports::CredentialStorePort;
use crate::infrastructure::api::{ApiClient, ApiRequest, Endpoint};

use super::services::surfaced;

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Login and session lifecycle against the Backbeat API.
#[derive(Clone)]
pub struct AuthSession {
    client: Arc<ApiClient>,
    credentials: Arc<dyn CredentialStorePort>,
}

impl AuthSession {
    /// Creates a session handler.
    #[must_use]
    pub fn new(client: Arc<ApiClient>, credentials: Arc<dyn CredentialStorePort>) -> Self {
        Self {
            client,
            credentials,
        }
    }

    /// Logs in and persists the session token. Surfaced.
    ///
    /// # Errors
    ///
    /// Returns the API error for the caller to display. A failure to
    /// persist the token is logged but does not fail the login.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        debug!(username, "Attempting login");

        let body = LoginBody { username, password };
        let request = ApiRequest::with_json(Endpoint::Login, &body)?;
        let response: LoginResponse = surfaced("login", self.client.request(request)).await?;

        match AuthToken::new(&response.token) {
            Some(token) => {
                if let Err(e) = self.credentials.store_token(&token).await {
                    warn!(error = %e, "Failed to persist session token");
                }
            }
            None => warn!("Login response carried an empty token"),
        }

        info!(
            user_id = response.user.id,
            username = %response.user.username,
            "Authenticated"
        );

        Ok(response.user)
    }

    /// Registers an account, then logs straight in with the new
    /// credentials. Surfaced.
    ///
    /// # Errors
    ///
    /// Returns the API error from either the registration or the follow-up
    /// login.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let body = RegisterBody {
            username,
            email,
            password,
        };
        let request = ApiRequest::with_json(Endpoint::Register, &body)?;
        let _: LoginResponse = surfaced("register", self.client.request(request)).await?;

        self.login(username, password).await
    }

    /// Clears the stored session. Safe to call when already logged out.
    pub async fn logout(&self) {
        if let Err(e) = self.credentials.delete_token().await {
            warn!(error = %e, "Failed to delete stored session token");
        }
    }

    /// Fetches the authenticated user's profile. Surfaced.
    ///
    /// # Errors
    ///
    /// Returns the API error for the caller to display.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        surfaced(
            "current user",
            self.client.request(ApiRequest::new(Endpoint::Me)),
        )
        .await
    }

    /// Restores a persisted session, if one exists and is still valid. A
    /// failing profile fetch means the token is expired or revoked; the
    /// stored credential is cleared so the next launch starts logged out.
    pub async fn restore(&self) -> Option<User> {
        match self.credentials.get_token().await {
            Ok(Some(_)) => {}
            _ => return None,
        }

        match self.client.request(ApiRequest::new(Endpoint::Me)).await {
            Ok(user) => Some(user),
            Err(e) => {
                debug!(error = %e, "Stored session is no longer valid");
                self.logout().await;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MemoryCredentialStore;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_session(server: &MockServer, store: Arc<MemoryCredentialStore>) -> AuthSession {
        let client = Arc::new(ApiClient::new(server.uri(), store.clone()).unwrap());
        AuthSession::new(client, store)
    }

    #[tokio::test]
    async fn test_login_stores_token_and_returns_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": "fresh-session",
                "user": {"id": 3, "username": "ada"}
            })))
            .mount(&server)
            .await;

        let store = Arc::new(MemoryCredentialStore::new());
        let session = make_session(&server, store.clone());

        let user = session.login("ada", "hunter2").await.unwrap();

        assert_eq!(user.id, 3);
        let stored = store.get_token().await.unwrap().unwrap();
        assert_eq!(stored.as_str(), "fresh-session");
    }

    #[tokio::test]
    async fn test_login_rejection_is_surfaced_and_stores_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let store = Arc::new(MemoryCredentialStore::new());
        let session = make_session(&server, store.clone());

        let result = session.login("ada", "wrong").await;

        assert_eq!(result.unwrap_err(), ApiError::Unauthorized);
        assert!(store.get_token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_restore_clears_rejected_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let store = Arc::new(MemoryCredentialStore::with_token(AuthToken::new_unchecked(
            "stale",
        )));
        let session = make_session(&server, store.clone());

        assert!(session.restore().await.is_none());
        assert!(store.get_token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_restore_without_token_skips_network() {
        let server = MockServer::start().await;
        let store = Arc::new(MemoryCredentialStore::new());
        let session = make_session(&server, store);

        assert!(session.restore().await.is_none());
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_logs_in_afterwards() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/register"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "token": "ignored",
                "user": {"id": 9, "username": "nia"}
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/users/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": "real-session",
                "user": {"id": 9, "username": "nia"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let store = Arc::new(MemoryCredentialStore::new());
        let session = make_session(&server, store.clone());

        let user = session.register("nia", "nia@example.com", "pw").await.unwrap();

        assert_eq!(user.id, 9);
        let stored = store.get_token().await.unwrap().unwrap();
        assert_eq!(stored.as_str(), "real-session");
    }
}
