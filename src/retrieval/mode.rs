use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RetrievalError;

/// Retrieval strategy hint sent to the backend.
///
/// The mode only changes how the backend gathers passages. Every response still carries
/// both the vector and the text-match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RetrievalMode {
    /// Vector and full-text retrieval combined. Wire code `VEC_FT`.
    #[default]
    #[serde(rename = "VEC_FT")]
    Hybrid,
    /// Vector (HNSW) retrieval only. Wire code `VEC`.
    #[serde(rename = "VEC")]
    VectorOnly,
    /// Full-text (BM25) retrieval only. Wire code `FT`.
    #[serde(rename = "FT")]
    FulltextOnly,
}

impl RetrievalMode {
    /// All modes, in menu order.
    pub const ALL: [RetrievalMode; 3] = [
        RetrievalMode::Hybrid,
        RetrievalMode::VectorOnly,
        RetrievalMode::FulltextOnly,
    ];

    /// Compact code for the `search_type` query parameter.
    pub fn code(&self) -> &'static str {
        match self {
            RetrievalMode::Hybrid => "VEC_FT",
            RetrievalMode::VectorOnly => "VEC",
            RetrievalMode::FulltextOnly => "FT",
        }
    }

    /// Human-readable menu label.
    pub fn label(&self) -> &'static str {
        match self {
            RetrievalMode::Hybrid => "vector and fulltext",
            RetrievalMode::VectorOnly => "vector only",
            RetrievalMode::FulltextOnly => "fulltext only",
        }
    }

    /// Parses an exact wire code. Unknown codes return `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.code() == code)
    }

    /// Parses an exact menu label. Unknown labels return `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.label() == label)
    }
}

impl fmt::Display for RetrievalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RetrievalMode {
    type Err = RetrievalError;

    /// Accepts a wire code or a menu label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| {
                mode.code().eq_ignore_ascii_case(wanted) || mode.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| RetrievalError::UnknownMode {
                value: s.to_string(),
            })
    }
}
