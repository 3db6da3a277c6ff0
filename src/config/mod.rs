//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `WIKIQA_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::constants::{DEFAULT_BACKEND_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_WIKI_HOST};
use crate::retrieval::RetrievalMode;

/// Client configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `WIKIQA_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Question-answering endpoint. Default: `http://127.0.0.1:8000/ask`.
    pub backend_url: String,

    /// Host prefix for deep links, without a trailing slash. Default: `https://www.wikipedia.org`.
    pub wiki_host: String,

    /// Client-side request timeout in seconds. Default: `30`.
    pub request_timeout_secs: u64,

    /// Mode used until the user picks another. Default: hybrid.
    pub default_mode: RetrievalMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            wiki_host: DEFAULT_WIKI_HOST.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            default_mode: RetrievalMode::default(),
        }
    }
}

impl Config {
    const ENV_BACKEND_URL: &'static str = "WIKIQA_BACKEND_URL";
    const ENV_WIKI_HOST: &'static str = "WIKIQA_WIKI_HOST";
    const ENV_TIMEOUT_SECS: &'static str = "WIKIQA_TIMEOUT_SECS";
    const ENV_SEARCH_TYPE: &'static str = "WIKIQA_SEARCH_TYPE";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let backend_url = Self::parse_string_from_env(Self::ENV_BACKEND_URL, defaults.backend_url);
        let wiki_host = Self::parse_string_from_env(Self::ENV_WIKI_HOST, defaults.wiki_host)
            .trim_end_matches('/')
            .to_string();
        let request_timeout_secs = Self::parse_timeout_from_env(defaults.request_timeout_secs)?;
        let default_mode = Self::parse_mode_from_env(defaults.default_mode)?;

        Ok(Self {
            backend_url,
            wiki_host,
            request_timeout_secs,
            default_mode,
        })
    }

    /// Validates URLs and the timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_http_url(Self::ENV_BACKEND_URL, &self.backend_url)?;
        Self::validate_http_url(Self::ENV_WIKI_HOST, &self.wiki_host)?;

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                value: self.request_timeout_secs.to_string(),
            });
        }

        Ok(())
    }

    /// Returns the request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validate_http_url(name: &'static str, value: &str) -> Result<(), ConfigError> {
        let url = Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
            name,
            value: value.to_string(),
            source: e,
        })?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConfigError::UnsupportedScheme {
                name,
                scheme: scheme.to_string(),
            }),
        }
    }

    fn parse_timeout_from_env(default: u64) -> Result<u64, ConfigError> {
        match env::var(Self::ENV_TIMEOUT_SECS) {
            Ok(value) => {
                let secs: u64 = value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidTimeout {
                        value: value.clone(),
                    })?;

                if secs == 0 {
                    return Err(ConfigError::InvalidTimeout { value });
                }

                Ok(secs)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_mode_from_env(default: RetrievalMode) -> Result<RetrievalMode, ConfigError> {
        match env::var(Self::ENV_SEARCH_TYPE) {
            Ok(value) if value.trim().is_empty() => Ok(default),
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidSearchType { value }),
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }
}
