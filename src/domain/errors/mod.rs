//! Error types.

mod api_error;
mod credential_error;

pub use api_error::ApiError;
pub use credential_error::CredentialError;
