//! Backbeat API client.

mod client;
mod endpoint;
mod multipart;
mod request;

pub use client::ApiClient;
pub use endpoint::{Endpoint, HttpMethod};
pub use multipart::MultipartForm;
pub use request::ApiRequest;
