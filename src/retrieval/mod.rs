//! Retrieval client for the question-answering backend.
//!
//! [`RetrievalClient::search`] sends one `GET` with `question` and `search_type`, decodes the
//! JSON array of candidates, fuses the two relevance scores and sorts by the result.
//!
//! # Score Fusion
//!
//! The backend always returns both `HNSW_score` (vector) and `QA_score` (text match),
//! whatever the [`RetrievalMode`]. They are combined with
//! [`FUSION_WEIGHT`](crate::constants::FUSION_WEIGHT) into `fused_score`, and the list is
//! stable-sorted on it so ties keep backend order.

pub mod backend;
pub mod client;
pub mod error;
pub mod fusion;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod mode;
pub mod model;


pub use backend::{AnswerBackend, HttpBackend};
pub use client::{RetrievalClient, parse_candidates};
pub use error::{RetrievalError, RetrievalResult};
pub use fusion::{fuse_score, rank_candidates};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MOCK_BACKEND_URL, MockBackend, MockReply};
pub use mode::RetrievalMode;
pub use model::{Candidate, RawCandidate, SearchRequest};
