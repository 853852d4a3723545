use thiserror::Error;

#[derive(Debug, Error)]
pub enum IddqdError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("non-binary value {value} at ({row}, {col})")]
    NonBinaryCell { row: usize, col: usize, value: i64 },
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("grid has no hit cell")]
    NoHits,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl IddqdError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse { line, message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, IddqdError>;
