//! Credential storage error types.

use thiserror::Error;

/// Credential storage error variants.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The secure storage backend could not be opened.
    #[error("failed to access credential store: {0}")]
    AccessFailed(String),

    /// Reading the stored token failed.
    #[error("failed to retrieve credential: {0}")]
    RetrievalFailed(String),

    /// Writing the token failed.
    #[error("failed to store credential: {0}")]
    StorageFailed(String),

    /// Deleting the token failed.
    #[error("failed to delete credential: {0}")]
    DeletionFailed(String),
}
