use std::io;

use agenda_core::client::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] agenda_core::Error),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Session ID cannot be empty")]
    EmptySessionId,
    #[error("Session not found: {0}")]
    SessionNotFound(String),
    #[error("`agenda {0}` needs a running API. Pass --api-url or set AGENDA_API_URL.")]
    RemoteRequired(&'static str),
}
