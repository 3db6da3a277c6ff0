use std::collections::HashMap;
use std::time::Duration;

use parking_lot::Mutex;

use super::backend::AnswerBackend;
use super::error::{RetrievalError, RetrievalResult};
use super::model::SearchRequest;

pub const MOCK_BACKEND_URL: &str = "mock://ask";

/// Canned reply for [`MockBackend`].
#[derive(Debug, Clone)]
pub enum MockReply {
    /// 200 with this body.
    Body(String),
    /// Non-success status; the body is never produced.
    Status(u16),
    /// Connection-level failure.
    Transport(String),
}

#[derive(Debug, Clone)]
struct MockRoute {
    reply: MockReply,
    delay: Option<Duration>,
}

/// In-memory backend keyed by question text.
///
/// Questions without a route get the fallback reply (`[]` unless overridden).
#[derive(Debug)]
pub struct MockBackend {
    routes: Mutex<HashMap<String, MockRoute>>,
    fallback: Mutex<MockReply>,
    requests: Mutex<Vec<SearchRequest>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            routes: Mutex::new(HashMap::new()),
            fallback: Mutex::new(MockReply::Body("[]".to_string())),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every unrouted question with `body`.
    pub fn with_body(body: impl Into<String>) -> Self {
        let backend = Self::new();
        *backend.fallback.lock() = MockReply::Body(body.into());
        backend
    }

    /// Answers every unrouted question with `status`.
    pub fn with_status(status: u16) -> Self {
        let backend = Self::new();
        *backend.fallback.lock() = MockReply::Status(status);
        backend
    }

    pub fn route(&self, question: impl Into<String>, reply: MockReply) {
        self.routes.lock().insert(
            question.into(),
            MockRoute {
                reply,
                delay: None,
            },
        );
    }

    /// Like [`route`](Self::route), but the reply arrives after `delay`.
    pub fn route_delayed(&self, question: impl Into<String>, reply: MockReply, delay: Duration) {
        self.routes.lock().insert(
            question.into(),
            MockRoute {
                reply,
                delay: Some(delay),
            },
        );
    }

    /// Requests seen so far, in arrival order.
    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

impl AnswerBackend for MockBackend {
    async fn fetch(&self, request: &SearchRequest) -> RetrievalResult<String> {
        self.requests.lock().push(request.clone());

        let route = self.routes.lock().get(&request.question).cloned();
        let (reply, delay) = match route {
            Some(route) => (route.reply, route.delay),
            None => (self.fallback.lock().clone(), None),
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match reply {
            MockReply::Body(body) => Ok(body),
            MockReply::Status(status) => Err(RetrievalError::Status {
                url: MOCK_BACKEND_URL.to_string(),
                status,
            }),
            MockReply::Transport(message) => Err(RetrievalError::Transport {
                url: MOCK_BACKEND_URL.to_string(),
                message,
            }),
        }
    }
}
