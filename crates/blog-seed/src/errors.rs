use thiserror::Error;

/// Errors raised while generating or rendering seed data.
///
/// Every variant is fatal to the run: nothing is written once one occurs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Unknown placeholder {{{name}}} in title pattern \"{pattern}\"")]
    UnknownPlaceholder { name: String, pattern: String },

    #[error("Unterminated placeholder in title pattern \"{0}\"")]
    UnterminatedPlaceholder(String),

    #[error("No vocabulary values for placeholder {{{0}}}")]
    EmptyVocabulary(&'static str),

    #[error("No post templates to choose from")]
    NoTemplates,

    #[error("No cover images to choose from")]
    NoCoverImages,

    #[error("Value cannot be written as a SQL literal (contains NUL): {0:?}")]
    InvalidLiteral(String),

    #[error("Cannot render an INSERT with no rows")]
    EmptyBatch,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Timestamp error: {0}")]
    Timestamp(String),
}

impl From<time::error::Format> for GenerateError {
    fn from(e: time::error::Format) -> Self {
        GenerateError::Timestamp(e.to_string())
    }
}
