use crate::config::Config;
use crate::constants::{DEFAULT_WIKI_HOST, ELLIPSIS, EXCERPT_CONTEXT_CHARS};
use crate::retrieval::Candidate;

use super::error::FormattingError;
use super::link::deep_link;
use super::types::Excerpt;

/// Stateless builder of [`Excerpt`]s.
#[derive(Debug, Clone)]
pub struct ExcerptFormatter {
    wiki_host: String,
    context_chars: usize,
}

impl Default for ExcerptFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_WIKI_HOST)
    }
}

impl ExcerptFormatter {
    pub fn new(wiki_host: impl Into<String>) -> Self {
        Self {
            wiki_host: wiki_host.into(),
            context_chars: EXCERPT_CONTEXT_CHARS,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.wiki_host.clone())
    }

    /// Overrides the short-context width (in chars).
    pub fn with_context_chars(mut self, context_chars: usize) -> Self {
        self.context_chars = context_chars;
        self
    }

    pub fn wiki_host(&self) -> &str {
        &self.wiki_host
    }

    pub fn context_chars(&self) -> usize {
        self.context_chars
    }

    /// Builds the short and full excerpts, deep link and display score for `candidate`.
    ///
    /// The first occurrence of the answer in the source is used.
    pub fn format(&self, candidate: &Candidate) -> Result<Excerpt, FormattingError> {
        let answer = candidate.answer_text.as_str();
        let source = candidate.source_text.as_str();

        if answer.is_empty() {
            return Err(FormattingError::EmptyAnswer);
        }

        let start = source
            .find(answer)
            .ok_or_else(|| FormattingError::AnswerNotFound {
                answer: answer.to_string(),
            })?;
        let end = start + answer.len();

        let full_before = &source[..start];
        let full_after = &source[end..];

        let short_before = if start == 0 {
            String::new()
        } else {
            format!("{ELLIPSIS}{}", tail_chars(full_before, self.context_chars))
        };
        let short_after = format!("{}{ELLIPSIS}", head_chars(full_after, self.context_chars));

        Ok(Excerpt {
            answer: answer.to_string(),
            short_before,
            short_after,
            full_before: full_before.to_string(),
            full_after: full_after.to_string(),
            deep_link: deep_link(&self.wiki_host, &candidate.document_path, answer),
            display_score: display_score(candidate.fused_score),
        })
    }
}

/// Formats a fused score as a percentage with two decimals.
pub fn display_score(fused_score: f64) -> String {
    format!("{:.2}", fused_score * 100.0)
}

/// Last `n` chars of `s`.
fn tail_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match s.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}

/// First `n` chars of `s`.
fn head_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::{head_chars, tail_chars};

    #[test]
    fn test_tail_and_head_clamp() {
        assert_eq!(tail_chars("abc", 5), "abc");
        assert_eq!(head_chars("abc", 5), "abc");
        assert_eq!(tail_chars("abcdef", 2), "ef");
        assert_eq!(head_chars("abcdef", 2), "ab");
        assert_eq!(tail_chars("abc", 0), "");
        assert_eq!(head_chars("abc", 0), "");
    }

    #[test]
    fn test_multibyte_boundaries() {
        assert_eq!(tail_chars("Zürich café", 4), "café");
        assert_eq!(head_chars("日本語のテキスト", 3), "日本語");
    }
}
