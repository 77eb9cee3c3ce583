//! Runtime configuration
//!
//! The only configurable value is the catalog base URL. It can be overridden
//! through the `SHOWBOARD_API_BASE_URL` environment variable.

use thiserror::Error;

/// Catalog host used when no override is given
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Environment variable overriding the catalog base URL
pub const BASE_URL_ENV: &str = "SHOWBOARD_API_BASE_URL";

/// Errors that can occur while building the configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL is not an absolute http(s) URL
    #[error("Invalid catalog base URL '{0}': expected an http:// or https:// URL")]
    InvalidBaseUrl(String),
}

/// Validated runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog base URL without trailing slash
    pub base_url: String,
    /// Page shown when the dashboard starts
    pub start_page: u32,
}

impl Config {
    /// Builds a configuration, validating and normalizing the base URL
    pub fn new(base_url: &str, start_page: u32) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let has_host = ["http://", "https://"]
            .iter()
            .any(|scheme| trimmed.len() > scheme.len() && trimmed.starts_with(scheme));

        if !has_host {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            start_page,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            start_page: 0,
        }
    }
}
