//! Backbeat API HTTP client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode, Url, header};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::endpoint::Endpoint;
use super::multipart::MultipartForm;
use super::request::ApiRequest;
use crate::domain::errors::ApiError;
use crate::domain::ports::CredentialStorePort;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Backbeat API.
///
/// Holds no per-call state beyond its configuration, so one instance is
/// safely shared across every concurrent flow in the process. The credential
/// store is read fresh on each authenticated request; a login or logout is
/// observed on the very next call.
pub struct ApiClient {
    http: Client,
    base_url: String,
    credentials: Arc<dyn CredentialStorePort>,
}

impl ApiClient {
    /// Creates a client against the given API base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        credentials: Arc<dyn CredentialStorePort>,
    ) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            credentials,
        })
    }

    /// Executes a request and decodes the response body.
    ///
    /// # Errors
    ///
    /// Returns the validation error for non-2xx statuses, or
    /// [`ApiError::Decoding`] when a 2xx body does not match `T`.
    pub async fn request<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let (status, body) = self.perform(request).await?;
        Self::validate(status, &body)?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "Failed to decode response body");
            ApiError::Decoding
        })
    }

    /// Executes a request, validating the status and discarding the body.
    ///
    /// # Errors
    ///
    /// Returns the validation error for non-2xx statuses.
    pub async fn request_void(&self, request: ApiRequest) -> Result<(), ApiError> {
        let (status, body) = self.perform(request).await?;
        Self::validate(status, &body)
    }

    /// Executes a multipart upload and decodes the response body.
    ///
    /// # Errors
    ///
    /// Returns the validation error for non-2xx statuses, or
    /// [`ApiError::Decoding`] when a 2xx body does not match `T`.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        form: MultipartForm,
    ) -> Result<T, ApiError> {
        let url = self.build_url(&endpoint, &[])?;
        let content_type = form.content_type();

        let mut builder = self
            .http
            .request(endpoint.method().into(), url)
            .header(header::CONTENT_TYPE, content_type)
            .body(form.finalize());
        builder = self.inject_auth(builder, &endpoint).await?;

        let (status, body) = self.send(builder).await?;
        Self::validate(status, &body)?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "Failed to decode upload response");
            ApiError::Decoding
        })
    }

    async fn perform(&self, request: ApiRequest) -> Result<(StatusCode, Vec<u8>), ApiError> {
        let ApiRequest {
            endpoint,
            body,
            query,
        } = request;

        let url = self.build_url(&endpoint, &query)?;
        let mut builder = self.http.request(endpoint.method().into(), url);

        if let Some(body) = body {
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        builder = self.inject_auth(builder, &endpoint).await?;

        self.send(builder).await
    }

    fn build_url(&self, endpoint: &Endpoint, query: &[(String, String)]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint.path()))
            .map_err(|_| ApiError::InvalidResponse)?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }

    async fn inject_auth(
        &self,
        builder: reqwest::RequestBuilder,
        endpoint: &Endpoint,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        if !endpoint.requires_auth() {
            return Ok(builder);
        }

        let token = match self.credentials.get_token().await {
            Ok(Some(token)) => token,
            Ok(None) => {
                debug!(path = %endpoint.path(), "No stored credential for authenticated endpoint");
                return Err(ApiError::Unauthorized);
            }
            Err(e) => {
                warn!(error = %e, "Credential store read failed");
                return Err(ApiError::Unauthorized);
            }
        };

        Ok(builder.bearer_auth(token.as_str()))
    }

    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<(StatusCode, Vec<u8>), ApiError> {
        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, "Transport failure");
            if e.is_timeout() {
                ApiError::network("request timed out")
            } else if e.is_connect() {
                ApiError::network("failed to connect to the server")
            } else {
                ApiError::network(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        Ok((status, body.to_vec()))
    }

    fn validate(status: StatusCode, body: &[u8]) -> Result<(), ApiError> {
        if status.is_success() {
            return Ok(());
        }

        match status.as_u16() {
            401 => Err(ApiError::Unauthorized),
            403 => Err(ApiError::Forbidden),
            code => Err(ApiError::http(code, Self::extract_error_message(body))),
        }
    }

    /// Extraction order: structured `message`/`error` field, then raw body
    /// text, then a literal fallback. This order decides what the user sees.
    fn extract_error_message(body: &[u8]) -> String {
        if let Ok(serde_json::Value::Object(map)) = serde_json::from_slice(body) {
            for key in ["message", "error"] {
                if let Some(serde_json::Value::String(text)) = map.get(key) {
                    return text.clone();
                }
            }
            return "Unknown error".to_string();
        }

        String::from_utf8(body.to_vec()).unwrap_or_else(|_| "Unknown error".to_string())
    }
}
