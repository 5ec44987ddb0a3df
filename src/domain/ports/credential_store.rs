//! Credential store port definition.

use async_trait::async_trait;

use crate::domain::entities::AuthToken;
use crate::domain::errors::CredentialError;

/// Port for the opaque secret slot holding the session bearer token.
///
/// The core reads the token fresh on every request that needs it and never
/// caches it across calls, so a login or logout takes effect on the very
/// next request.
#[async_trait]
pub trait CredentialStorePort: Send + Sync {
    /// Retrieves the stored token, if any.
    async fn get_token(&self) -> Result<Option<AuthToken>, CredentialError>;

    /// Stores the token.
    async fn store_token(&self, token: &AuthToken) -> Result<(), CredentialError>;

    /// Deletes the stored token. Deleting an empty slot is a no-op.
    async fn delete_token(&self) -> Result<(), CredentialError>;

    /// Checks whether a token is stored.
    async fn has_token(&self) -> Result<bool, CredentialError> {
        Ok(self.get_token().await?.is_some())
    }
}
