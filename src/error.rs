use crate::catalog::literature::Kind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LitregError {
    #[error("Unsupported literature kind: {0}")]
    UnsupportedKind(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No literature matching title \"{title}\" and publisher \"{publisher}\"")]
    NotFound { title: String, publisher: String },

    #[error("Expected a {expected}, found a {actual}")]
    KindMismatch { expected: Kind, actual: Kind },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LitregError>;
