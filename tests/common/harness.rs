//! Mock question-answering backend.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use parking_lot::Mutex;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 20;

/// Canned behavior of the `/ask` route.
#[derive(Debug, Clone)]
pub struct MockServerConfig {
    pub status: StatusCode,
    pub body: String,
    pub delay: Option<Duration>,
}

impl Default for MockServerConfig {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            body: "[]".to_string(),
            delay: None,
        }
    }
}

impl MockServerConfig {
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Default::default()
        }
    }

    pub fn with_status(status: StatusCode) -> Self {
        Self {
            status,
            body: r#"{"detail":"backend exploded"}"#.to_string(),
            ..Default::default()
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Clone)]
struct MockState {
    config: MockServerConfig,
    seen: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

pub struct MockQaServer {
    pub addr: SocketAddr,
    seen: Arc<Mutex<Vec<HashMap<String, String>>>>,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockQaServer {
    /// Full `/ask` endpoint URL.
    pub fn ask_url(&self) -> String {
        format!("http://{}/ask", self.addr)
    }

    /// Decoded query parameters of every request received so far.
    pub fn seen_queries(&self) -> Vec<HashMap<String, String>> {
        self.seen.lock().clone()
    }
}

impl Drop for MockQaServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
}

async fn ask(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    state.seen.lock().push(params);

    if let Some(delay) = state.config.delay {
        tokio::time::sleep(delay).await;
    }

    (state.config.status, state.config.body.clone())
}

async fn wait_for_server_ready(addr: SocketAddr) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();
    let timeout = Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS);

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(Duration::from_millis(STARTUP_POLL_INTERVAL_MS)).await;
            }
        }
    }
}

/// Spawns a mock backend on an ephemeral localhost port.
pub async fn spawn_mock_server(
    config: MockServerConfig,
) -> Result<MockQaServer, ServerStartupError> {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let addr = listener.local_addr()?;

    let seen = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        config,
        seen: Arc::clone(&seen),
    };
    let app = Router::new().route("/ask", get(ask)).with_state(state);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(addr).await?;

    Ok(MockQaServer {
        addr,
        seen,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}
