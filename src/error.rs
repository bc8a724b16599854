use thiserror::Error;

/// Result type alias for table loading and rendering
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON array of row objects")]
    NotAnArray,

    #[error("row {index} is not a JSON object")]
    RowNotObject { index: usize },

    #[error("unknown column '{0}'")]
    UnknownColumn(String),
}
