use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Internal server error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

impl From<agenda_core::Error> for AppError {
    fn from(error: agenda_core::Error) -> Self {
        match error {
            agenda_core::Error::InvalidInput(message) => Self::BadRequest(message),
            agenda_core::Error::NotFound(message) => Self::NotFound(message),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Config(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_status_codes() {
        let bad = AppError::from(agenda_core::Error::InvalidInput("empty".to_string()));
        assert_eq!(bad.into_response().status(), StatusCode::BAD_REQUEST);

        let missing = AppError::from(agenda_core::Error::NotFound("session 9".to_string()));
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        let io = AppError::from(agenda_core::Error::Io(std::io::Error::other("disk")));
        assert_eq!(
            io.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
