use serde_json::Value;
use tracing::{debug, info, warn};

use super::backend::AnswerBackend;
use super::error::{RetrievalError, RetrievalResult};
use super::fusion::rank_candidates;
use super::mode::RetrievalMode;
use super::model::{Candidate, RawCandidate, SearchRequest};
use crate::constants::FUSION_WEIGHT;

/// Fetches candidates for a question and returns them ranked by fused score.
///
/// Holds no state between calls besides the backend.
#[derive(Debug, Clone)]
pub struct RetrievalClient<B> {
    backend: B,
}

impl<B: AnswerBackend> RetrievalClient<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Searches for `question` using `mode`.
    ///
    /// An empty result is `Ok(vec![])`. A blank question is rejected before any request
    /// is made.
    pub async fn search(
        &self,
        question: &str,
        mode: RetrievalMode,
    ) -> RetrievalResult<Vec<Candidate>> {
        if question.trim().is_empty() {
            return Err(RetrievalError::InvalidRequest {
                reason: "question must not be empty".to_string(),
            });
        }

        let request = SearchRequest::new(question, mode);

        debug!(
            mode = mode.code(),
            question_len = question.len(),
            "Issuing search request"
        );

        let body = self.backend.fetch(&request).await?;
        let candidates = parse_candidates(&body)?;
        let ranked = rank_candidates(candidates, FUSION_WEIGHT);

        info!(
            mode = mode.code(),
            candidates = ranked.len(),
            "Search complete"
        );

        Ok(ranked)
    }
}

/// Decodes a backend body into candidates, preserving backend order.
///
/// The body must be a JSON array. Elements that are not objects, or lack `ans`/`text`,
/// are dropped with a warning; the rest of the batch is kept.
pub fn parse_candidates(body: &str) -> RetrievalResult<Vec<Candidate>> {
    let value: Value = serde_json::from_str(body).map_err(|e| RetrievalError::InvalidJson {
        message: e.to_string(),
    })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(RetrievalError::NotAnArray {
                found: json_type_name(&other),
            });
        }
    };

    let total = items.len();
    let candidates: Vec<Candidate> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let raw = match serde_json::from_value::<RawCandidate>(item) {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(index, error = %e, "Dropping candidate: malformed element");
                    return None;
                }
            };

            if raw.hnsw_score.is_none() || raw.qa_score.is_none() {
                debug!(index, "Candidate missing a score, defaulting to 0");
            }

            let candidate = raw.into_candidate();
            if candidate.is_none() {
                warn!(index, "Dropping candidate: missing `ans` or `text`");
            }
            candidate
        })
        .collect();

    if candidates.len() < total {
        debug!(
            kept = candidates.len(),
            dropped = total - candidates.len(),
            "Parsed response with dropped elements"
        );
    }

    Ok(candidates)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
