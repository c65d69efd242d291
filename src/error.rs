// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorBody;
use crate::services::completion_client::CompletionError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Content-Type must be application/json")]
    UnsupportedMediaType,

    #[error("{0}")]
    MalformedRequest(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    Upstream(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::MalformedRequest(_) | AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) | AppError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<CompletionError> for AppError {
    fn from(error: CompletionError) -> Self {
        match error {
            CompletionError::Configuration(msg) => AppError::Configuration(msg),
            CompletionError::Upstream(msg) => AppError::Upstream(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
