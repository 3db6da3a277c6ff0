use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors raised while building display excerpts.
pub enum FormattingError {
    /// The answer span does not occur in its source passage.
    #[error("answer '{answer}' not found in source text")]
    AnswerNotFound { answer: String },

    /// The answer span is empty, so there is nothing to locate.
    #[error("answer text is empty")]
    EmptyAnswer,
}
