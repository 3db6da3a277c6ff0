//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A URL setting could not be parsed.
    #[error("invalid URL in {name} '{value}': {source}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// A URL setting parsed but is not `http` or `https`.
    #[error("unsupported scheme '{scheme}' in {name}: expected http or https")]
    UnsupportedScheme { name: &'static str, scheme: String },

    /// Timeout is not a positive integer number of seconds.
    #[error("invalid timeout '{value}': must be a positive number of seconds")]
    InvalidTimeout { value: String },

    /// Search type matched no retrieval mode code or label.
    #[error("invalid search type '{value}': expected VEC_FT, VEC, FT or a menu label")]
    InvalidSearchType { value: String },
}
