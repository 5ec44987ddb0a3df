//! Application configuration.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

const APP_NAME: &str = "backbeat";
const APP_QUALIFIER: &str = "fm";
const APP_ORGANIZATION: &str = "backbeat";

/// Default API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.backbeat.fm/api";

/// Default page size for paginated lists.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration merged from the config file and environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API base URL.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Page size for paginated lists.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Log file path.
    #[serde(default)]
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: LogLevel::default(),
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the given path, or the default location,
    /// then applies environment overrides. A missing or unreadable file
    /// yields the defaults.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.map_or_else(Self::default_config_path, |p| Some(p.to_path_buf()));

        let mut config = path
            .and_then(|p| {
                let text = std::fs::read_to_string(&p).ok()?;
                debug!(path = %p.display(), "Loaded configuration file");
                toml::from_str::<AppConfig>(&text).ok()
            })
            .unwrap_or_default();

        if let Ok(base_url) = std::env::var("BACKBEAT_API_BASE_URL") {
            config.api_base_url = base_url;
        }

        config
    }

    fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: AppConfig = toml::from_str(r#"api_base_url = "http://localhost:3000/api""#)
            .unwrap();
        assert_eq!(config.api_base_url, "http://localhost:3000/api");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }
}
