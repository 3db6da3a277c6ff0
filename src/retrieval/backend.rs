use std::time::Duration;

use reqwest::Client as HttpClient;
use tracing::debug;

use super::error::{RetrievalError, RetrievalResult};
use super::model::SearchRequest;
use crate::config::Config;

/// Transport that turns a [`SearchRequest`] into a raw response body.
///
/// Implementations must return [`RetrievalError::Status`] for non-success responses
/// without reading the body.
pub trait AnswerBackend: Send + Sync {
    /// Performs one request and returns the body text.
    fn fetch(
        &self,
        request: &SearchRequest,
    ) -> impl std::future::Future<Output = RetrievalResult<String>> + Send;
}

#[derive(Debug, Clone)]
/// `reqwest`-backed transport for the `/ask` endpoint.
pub struct HttpBackend {
    http: HttpClient,
    url: String,
    timeout: Duration,
}

impl HttpBackend {
    /// Creates a backend for `url` with a per-request `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> RetrievalResult<Self> {
        let url = url.into();
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RetrievalError::InvalidRequest {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { http, url, timeout })
    }

    /// Creates a backend from [`Config::backend_url`] and [`Config::request_timeout`].
    pub fn from_config(config: &Config) -> RetrievalResult<Self> {
        Self::new(config.backend_url.clone(), config.request_timeout())
    }

    /// Returns the configured endpoint.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn map_send_error(&self, e: reqwest::Error) -> RetrievalError {
        if e.is_timeout() {
            RetrievalError::Timeout {
                url: self.url.clone(),
                timeout: self.timeout,
            }
        } else {
            RetrievalError::Transport {
                url: self.url.clone(),
                message: e.to_string(),
            }
        }
    }
}

impl AnswerBackend for HttpBackend {
    async fn fetch(&self, request: &SearchRequest) -> RetrievalResult<String> {
        let resp = self
            .http
            .get(&self.url)
            .query(&request.query_pairs())
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = resp.status();
        debug!(status = status.as_u16(), url = %self.url, "Backend responded");

        if !status.is_success() {
            return Err(RetrievalError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        resp.text().await.map_err(|e| self.map_send_error(e))
    }
}
