//! Session token value object.

use std::fmt;

/// Bearer token for the Backbeat API with masking for log output.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken {
    value: String,
}

impl AuthToken {
    /// Creates a new token, rejecting empty or whitespace-only input.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return None;
        }

        Some(Self { value })
    }

    /// Creates a token without validation.
    #[must_use]
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes the token and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.value
    }

    /// Returns a masked token for display.
    #[must_use]
    pub fn masked(&self) -> String {
        if self.value.len() <= 10 {
            return "*".repeat(self.value.len());
        }

        let visible_prefix = &self.value[..4];
        let visible_suffix = &self.value[self.value.len() - 4..];
        format!("{visible_prefix}...{visible_suffix}")
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("value", &self.masked())
            .finish()
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token() -> String {
        "eyJhbGciOiJIUzI1NiJ9.c2Vzc2lvbg.c2lnbmF0dXJl".to_string()
    }

    #[test]
    fn test_valid_token_creation() {
        let token = AuthToken::new(make_token());
        assert!(token.is_some());
    }

    #[test]
    fn test_empty_token_rejected() {
        assert!(AuthToken::new("").is_none());
        assert!(AuthToken::new("   \n").is_none());
    }

    #[test]
    fn test_token_trims_whitespace() {
        let token = AuthToken::new(format!("  {}  ", make_token())).unwrap();
        assert_eq!(token.as_str(), make_token());
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let token = AuthToken::new_unchecked(make_token());
        let debug_output = format!("{token:?}");

        assert!(!debug_output.contains(&make_token()));
        assert!(debug_output.contains("..."));
    }
}
