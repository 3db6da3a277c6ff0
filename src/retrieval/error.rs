use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by retrieval operations.
///
/// Transport, timeout and status errors are retrieval failures. `InvalidJson` and
/// `NotAnArray` are parse failures; see [`RetrievalError::is_parse_failure`].
pub enum RetrievalError {
    /// The request never produced a response.
    #[error("request to '{url}' failed: {message}")]
    Transport {
        /// Endpoint URL.
        url: String,
        /// Error message.
        message: String,
    },

    /// No response within the client-side timeout.
    #[error("request to '{url}' timed out after {timeout:?}")]
    Timeout {
        /// Endpoint URL.
        url: String,
        /// Configured timeout.
        timeout: Duration,
    },

    /// The backend answered with a non-success status. The body is not read.
    #[error("backend at '{url}' returned status {status}")]
    Status {
        /// Endpoint URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The request could not be built.
    #[error("invalid request: {reason}")]
    InvalidRequest {
        /// What was wrong.
        reason: String,
    },

    /// Response body was not valid JSON.
    #[error("response body is not valid JSON: {message}")]
    InvalidJson {
        /// Parser message.
        message: String,
    },

    /// Response body was JSON but not an array.
    #[error("expected a JSON array of candidates, found {found}")]
    NotAnArray {
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// A retrieval mode string matched no code or label.
    #[error("unknown retrieval mode '{value}' (expected VEC_FT, VEC, FT or a menu label)")]
    UnknownMode {
        /// The rejected input.
        value: String,
    },
}

impl RetrievalError {
    /// Returns `true` for errors raised while decoding a received body.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            RetrievalError::InvalidJson { .. } | RetrievalError::NotAnArray { .. }
        )
    }

    /// Returns `true` for errors raised before or while talking to the backend.
    pub fn is_retrieval_failure(&self) -> bool {
        matches!(
            self,
            RetrievalError::Transport { .. }
                | RetrievalError::Timeout { .. }
                | RetrievalError::Status { .. }
                | RetrievalError::InvalidRequest { .. }
        )
    }
}

pub type RetrievalResult<T> = Result<T, RetrievalError>;
