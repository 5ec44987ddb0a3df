//! API error types.

use thiserror::Error;

/// Error outcomes for calls against the Backbeat API.
///
/// The taxonomy is flat: each variant is a terminal outcome, never a wrapped
/// chain. Callers either surface `user_message` or swallow the error whole.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Missing, invalid, or expired credential (HTTP 401, or no stored token
    /// on an endpoint that requires one).
    #[error("unauthorized: missing or rejected credential")]
    Unauthorized,

    /// HTTP 403; the action is not permitted for the current identity.
    #[error("forbidden")]
    Forbidden,

    /// Any other non-2xx status, carrying the server-supplied message.
    #[error("http {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// 2xx response whose body could not be parsed into the expected shape.
    #[error("failed to decode response body")]
    Decoding,

    /// Transport-level failure; no response was obtained.
    #[error("network error: {message}")]
    Network {
        /// Description of the transport failure.
        message: String,
    },

    /// Malformed request construction or unreadable response envelope.
    #[error("invalid response")]
    InvalidResponse,
}

impl ApiError {
    /// Creates an HTTP status error.
    #[must_use]
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Returns the fixed user-facing description for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized => "Session expired. Please log in again.".to_string(),
            Self::Forbidden => {
                "You don't have permission to perform this action.".to_string()
            }
            Self::Http { status, message } => format!("Error {status}: {message}"),
            Self::Decoding => "Failed to process server response.".to_string(),
            Self::Network { .. } => {
                "Network connection failed. Please check your internet.".to_string()
            }
            Self::InvalidResponse => "Invalid response from server.".to_string(),
        }
    }

    /// Returns whether the error indicates a failed or missing session.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_user_message_includes_status_and_body_message() {
        let error = ApiError::http(422, "artist name taken");
        assert_eq!(error.user_message(), "Error 422: artist name taken");
    }

    #[test]
    fn test_unauthorized_is_auth_failure() {
        assert!(ApiError::Unauthorized.is_auth_failure());
        assert!(!ApiError::Forbidden.is_auth_failure());
        assert!(!ApiError::network("reset").is_auth_failure());
    }
}
