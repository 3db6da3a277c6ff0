use serde::{Deserialize, Serialize};

use super::mode::RetrievalMode;
use crate::constants::{QUESTION_PARAM, SEARCH_TYPE_PARAM};

/// One question/mode pair, as sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub question: String,
    pub mode: RetrievalMode,
}

impl SearchRequest {
    pub fn new(question: impl Into<String>, mode: RetrievalMode) -> Self {
        Self {
            question: question.into(),
            mode,
        }
    }

    /// Query parameters in wire order. Values are raw; the transport percent-encodes them.
    pub fn query_pairs(&self) -> [(&'static str, &str); 2] {
        [
            (QUESTION_PARAM, self.question.as_str()),
            (SEARCH_TYPE_PARAM, self.mode.code()),
        ]
    }
}

/// Backend element as it appears on the wire.
///
/// Every field is optional so a single malformed element can be inspected instead of
/// failing the whole batch. Unlisted fields (`score`, `id`) are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawCandidate {
    #[serde(default)]
    pub ans: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default, rename = "HNSW_score")]
    pub hnsw_score: Option<f64>,
    #[serde(default, rename = "QA_score")]
    pub qa_score: Option<f64>,
}

impl RawCandidate {
    /// Converts into a [`Candidate`] with `fused_score` still unset (0.0).
    ///
    /// Returns `None` when `ans` or `text` is missing. Missing scores become 0.0 and
    /// missing `title`/`href` become empty strings.
    pub fn into_candidate(self) -> Option<Candidate> {
        Some(Candidate {
            answer_text: self.ans?,
            source_text: self.text?,
            title: self.title.unwrap_or_default(),
            document_path: self.href.unwrap_or_default(),
            vector_score: self.hnsw_score.unwrap_or(0.0),
            text_match_score: self.qa_score.unwrap_or(0.0),
            fused_score: 0.0,
        })
    }
}

/// One retrieved answer unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The exact answer span.
    pub answer_text: String,
    /// Passage the answer was extracted from. Expected to contain `answer_text`.
    pub source_text: String,
    /// Source document title.
    pub title: String,
    /// Path of the source document on the wiki host, e.g. `/wiki/Paris`.
    pub document_path: String,
    /// Vector (HNSW) relevance.
    pub vector_score: f64,
    /// Extractive-QA (text match) relevance.
    pub text_match_score: f64,
    /// Derived ranking score. Recomputed for every response.
    pub fused_score: f64,
}

impl Candidate {
    pub fn new(
        answer_text: impl Into<String>,
        source_text: impl Into<String>,
        vector_score: f64,
        text_match_score: f64,
    ) -> Self {
        Self {
            answer_text: answer_text.into(),
            source_text: source_text.into(),
            title: String::new(),
            document_path: String::new(),
            vector_score,
            text_match_score,
            fused_score: 0.0,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_document_path(mut self, path: impl Into<String>) -> Self {
        self.document_path = path.into();
        self
    }

    pub fn with_fused_score(mut self, fused_score: f64) -> Self {
        self.fused_score = fused_score;
        self
    }
}
