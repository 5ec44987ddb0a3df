//! Error handling policy wrappers.
//!
//! Every call site picks one of two policies explicitly, making
//! surfaced-versus-silent a visible property of the call instead of
//! implicit control flow.

use std::future::Future;

use tracing::{debug, warn};

use crate::domain::errors::ApiError;

/// Runs a user-initiated operation. Failures are logged and handed back to
/// the caller for display.
///
/// # Errors
///
/// Propagates the operation's error unchanged.
pub async fn surfaced<T, F>(context: &'static str, operation: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    match operation.await {
        Ok(value) => Ok(value),
        Err(error) => {
            warn!(context, error = %error, "Operation failed");
            Err(error)
        }
    }
}

/// Runs a background operation. Failures are swallowed; the caller keeps
/// its prior state unchanged.
pub async fn best_effort<T, F>(context: &'static str, operation: F) -> Option<T>
where
    F: Future<Output = Result<T, ApiError>>,
{
    match operation.await {
        Ok(value) => Some(value),
        Err(error) => {
            debug!(context, error = %error, "Best-effort operation failed");
            None
        }
    }
}
