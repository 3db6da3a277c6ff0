//! Display excerpts for retrieved answers.
//!
//! Given a [`Candidate`](crate::retrieval::Candidate), [`ExcerptFormatter::format`] locates the
//! first occurrence of the answer in its passage and derives:
//!
//! - a short context (50 chars each side, ellipsis-marked) and the full context,
//! - a deep link into the source article with a `#:~:text=` fragment,
//! - a two-decimal display score.
//!
//! Formatting is pure and lazy: callers run it only for answers they actually show, and the
//! short/full toggle is [`Excerpt::context`] on a flag the caller owns.

pub mod error;
pub mod formatter;
pub mod link;
pub mod types;


pub use error::FormattingError;
pub use formatter::{ExcerptFormatter, display_score};
pub use link::{deep_link, encode_text_directive};
pub use types::Excerpt;
