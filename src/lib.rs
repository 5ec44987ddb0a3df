//! Backbeat - client core for a social music discovery network.
//!
//! This crate provides the authenticated networking and live-synchronization
//! layer of the Backbeat client: a typed API client with multipart upload,
//! a cancellable background polling scheduler, pagination controllers, and a
//! merge engine for independently sourced video feeds.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing feature flows and shared services.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "backbeat";
