//! Request construction.

use serde::Serialize;

use super::endpoint::Endpoint;
use crate::domain::errors::ApiError;

/// Transient request value: an endpoint, an optional serialized JSON body,
/// and query parameters. Created per call and consumed by the client.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub(super) endpoint: Endpoint,
    pub(super) body: Option<Vec<u8>>,
    pub(super) query: Vec<(String, String)>,
}

impl ApiRequest {
    /// Creates a bodyless request.
    #[must_use]
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            body: None,
            query: Vec::new(),
        }
    }

    /// Creates a request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidResponse`] if the body cannot be serialized.
    pub fn with_json(endpoint: Endpoint, body: &impl Serialize) -> Result<Self, ApiError> {
        let body = serde_json::to_vec(body).map_err(|_| ApiError::InvalidResponse)?;

        Ok(Self {
            endpoint,
            body: Some(body),
            query: Vec::new(),
        })
    }

    /// Appends one query parameter.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Returns the target endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}
