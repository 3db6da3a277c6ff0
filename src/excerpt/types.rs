/// Display-ready view of one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Excerpt {
    /// The answer span, rendered between the context halves.
    pub answer: String,
    /// Up to the configured number of chars before the answer, with a leading ellipsis.
    /// Empty when the answer opens the passage.
    pub short_before: String,
    /// Up to the configured number of chars after the answer, with a trailing ellipsis.
    pub short_after: String,
    /// Entire passage before the answer.
    pub full_before: String,
    /// Entire passage after the answer.
    pub full_after: String,
    /// Link to the source document that scrolls to the answer.
    pub deep_link: String,
    /// `fused_score * 100` with two decimals. Display only.
    pub display_score: String,
}

impl Excerpt {
    /// Returns the `(before, after)` context for the requested form.
    pub fn context(&self, expanded: bool) -> (&str, &str) {
        if expanded {
            (&self.full_before, &self.full_after)
        } else {
            (&self.short_before, &self.short_after)
        }
    }
}

impl std::fmt::Display for Excerpt {
    /// Short form: `before [answer] after`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (before, after) = self.context(false);
        write!(f, "{}[{}]{}", before, self.answer, after)
    }
}
