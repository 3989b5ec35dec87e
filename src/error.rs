//! Error type shared by the corpus preprocessor and its collaborators.

use thiserror::Error;

/// Errors raised while building or querying a [`TextData`](crate::TextData).
#[derive(Error, Debug)]
pub enum TextDataError {
    /// The data identifier was empty.
    #[error("Initialization error: data identifier must be non-empty")]
    MissingIdentifier,
    /// Sample length or step cannot be used with this corpus.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    /// A symbol being encoded is not part of the vocabulary.
    #[error("Symbol {symbol:?} at position {position} is not in the vocabulary")]
    UnknownSymbol { symbol: char, position: usize },
    /// A slice was requested that cannot fit inside the corpus.
    #[error("Slice length {len} must be less than corpus length {text_len}")]
    SliceOutOfRange { len: usize, text_len: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type TextDataResult<T> = Result<T, TextDataError>;
