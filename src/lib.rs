//! Client library for an open-domain question-answering search service.
//!
//! # Public API Surface
//!
//! ## Retrieval
//! - [`RetrievalClient`] - issues one search and returns candidates ranked by fused score
//! - [`RetrievalMode`] - backend strategy hint (`VEC_FT`, `VEC`, `FT`)
//! - [`AnswerBackend`], [`HttpBackend`] - transport seam and its `reqwest` implementation
//! - [`fuse_score`], [`rank_candidates`], [`parse_candidates`] - the pure pipeline steps
//!
//! ## Display
//! - [`ExcerptFormatter`], [`Excerpt`] - short/full context, deep link and display score
//!
//! ## Session
//! - [`QuerySession`] - request sequencing so stale responses never overwrite newer ones
//!
//! ## Configuration
//! - [`Config`], [`ConfigError`] - `WIKIQA_*` environment configuration
//!
//! ## Test/Mock Support
//! [`MockBackend`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod excerpt;
pub mod retrieval;
pub mod session;

pub use config::{Config, ConfigError};
pub use constants::{EXCERPT_CONTEXT_CHARS, FUSION_WEIGHT};
pub use excerpt::{Excerpt, ExcerptFormatter, FormattingError, deep_link, display_score};
#[cfg(any(test, feature = "mock"))]
pub use retrieval::{MockBackend, MockReply};
pub use retrieval::{
    AnswerBackend, Candidate, HttpBackend, RetrievalClient, RetrievalError, RetrievalMode,
    RetrievalResult, SearchRequest, fuse_score, parse_candidates, rank_candidates,
};
pub use session::{QuerySession, SubmitOutcome};
