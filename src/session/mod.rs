//! Per-user query session.
//!
//! A new submission supersedes interest in any request still in flight. Each request gets a
//! token from a monotonically increasing counter, and only a response carrying the latest
//! token may replace the displayed list. Older responses, successes and failures alike, are
//! discarded. A failure of the latest request leaves the displayed list untouched.

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::retrieval::{AnswerBackend, Candidate, RetrievalClient, RetrievalMode, RetrievalResult};

/// What happened to a submitted question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank question; nothing was sent.
    Ignored,
    /// The response replaced the displayed list.
    Applied {
        /// Token of this request.
        token: u64,
        /// Number of candidates now displayed.
        count: usize,
    },
    /// A newer request was issued before this one finished; the response was dropped.
    Superseded {
        /// Token of this request.
        token: u64,
        /// Latest issued token at completion time.
        latest: u64,
    },
}

impl SubmitOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, SubmitOutcome::Applied { .. })
    }
}

#[derive(Debug, Default)]
struct Displayed {
    token: u64,
    candidates: Arc<[Candidate]>,
}

/// Owns the selected mode and the currently displayed candidate list.
#[derive(Debug)]
pub struct QuerySession<B> {
    client: RetrievalClient<B>,
    mode: RwLock<RetrievalMode>,
    sequence: AtomicU64,
    displayed: RwLock<Displayed>,
}

impl<B: AnswerBackend> QuerySession<B> {
    pub fn new(client: RetrievalClient<B>, mode: RetrievalMode) -> Self {
        Self {
            client,
            mode: RwLock::new(mode),
            sequence: AtomicU64::new(0),
            displayed: RwLock::new(Displayed::default()),
        }
    }

    pub fn client(&self) -> &RetrievalClient<B> {
        &self.client
    }

    pub fn mode(&self) -> RetrievalMode {
        *self.mode.read()
    }

    /// Changes the mode for subsequent submissions. Requests in flight keep theirs.
    pub fn select_mode(&self, mode: RetrievalMode) {
        *self.mode.write() = mode;
        debug!(mode = mode.code(), "Retrieval mode selected");
    }

    /// Latest issued token (0 before the first request).
    pub fn latest_token(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }

    /// Snapshot of the displayed list.
    pub fn displayed(&self) -> Arc<[Candidate]> {
        Arc::clone(&self.displayed.read().candidates)
    }

    /// Token of the response currently displayed (0 if none yet).
    pub fn displayed_token(&self) -> u64 {
        self.displayed.read().token
    }

    /// Submits `question` with the current mode.
    ///
    /// Returns the error only when this request is still the latest; stale failures are
    /// reported as [`SubmitOutcome::Superseded`].
    pub async fn submit(&self, question: &str) -> RetrievalResult<SubmitOutcome> {
        let question = question.trim();
        if question.is_empty() {
            debug!("Ignoring empty submission");
            return Ok(SubmitOutcome::Ignored);
        }

        let mode = self.mode();
        let token = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(token, mode = mode.code(), "Submitting question");

        let result = self.client.search(question, mode).await;

        let mut displayed = self.displayed.write();
        let latest = self.sequence.load(Ordering::SeqCst);
        if token != latest {
            debug!(
                token,
                latest,
                failed = result.is_err(),
                "Discarding superseded response"
            );
            return Ok(SubmitOutcome::Superseded { token, latest });
        }

        match result {
            Ok(candidates) => {
                let count = candidates.len();
                displayed.token = token;
                displayed.candidates = candidates.into();
                info!(token, count, "Displayed answers replaced");
                Ok(SubmitOutcome::Applied { token, count })
            }
            Err(e) => {
                warn!(token, error = %e, "Search failed; keeping previous answers");
                Err(e)
            }
        }
    }
}
