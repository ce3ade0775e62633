use thiserror::Error;

/// Errors surfaced by [`crate::infer_type`] and friends.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InferError {
    /// The input text is not relaxed JSON.
    #[error("malformed input at line {line}, column {column}: {message}")]
    MalformedInput {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("JSON pointer '{0}' does not resolve to a value")]
    PointerNotFound(String),
}

pub type InferResult<T> = Result<T, InferError>;
