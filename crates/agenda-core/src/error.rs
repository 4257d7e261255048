//! Error types for agenda-core

use thiserror::Error;

/// Result type alias using agenda-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in agenda-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session, speaker or location not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
