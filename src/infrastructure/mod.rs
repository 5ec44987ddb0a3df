//! Infrastructure layer with external service adapters.

/// Backbeat API client.
pub mod api;
/// Application configuration.
pub mod config;
/// Credential storage adapters.
pub mod storage;

pub use api::{ApiClient, ApiRequest, Endpoint, HttpMethod, MultipartForm};
pub use config::{AppConfig, CliArgs, Command, LogLevel};
pub use storage::KeyringCredentialStore;
