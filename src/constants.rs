//! Cross-cutting, shared constants.
//!
//! # Fusion Weight
//!
//! [`FUSION_WEIGHT`] is the `c` in `fused = (1 - c) * vector + c * text_match`. It is a
//! compile-time constant rather than a [`Config`](crate::config::Config) field: ranking
//! must not change behind the caller's back, and tuning it means touching only this line.

/// Weight given to the text-match (QA) score when fusing. `0.0` ranks on vector score alone.
pub const FUSION_WEIGHT: f64 = 0.0;

/// Number of characters of context shown on each side of an answer in the short excerpt.
pub const EXCERPT_CONTEXT_CHARS: usize = 50;

/// Marker for truncated context.
pub const ELLIPSIS: &str = "...";

/// Scroll-to-text fragment prefix appended to deep links.
pub const TEXT_FRAGMENT_PREFIX: &str = "#:~:text=";

/// Default question-answering endpoint.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000/ask";

/// Default host that `href` document paths are resolved against.
pub const DEFAULT_WIKI_HOST: &str = "https://www.wikipedia.org";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Query parameter carrying the raw question.
pub const QUESTION_PARAM: &str = "question";

/// Query parameter carrying the [`RetrievalMode`](crate::retrieval::RetrievalMode) code.
pub const SEARCH_TYPE_PARAM: &str = "search_type";
