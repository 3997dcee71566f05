use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source file not found: {0}")]
    FileNotFound(String),
    #[error("source file read error: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("invalid JSON in {file}: {message}")]
    InvalidJson { file: String, message: String },
    #[error("expected a JSON array in {0}")]
    NotAnArray(String),
}
