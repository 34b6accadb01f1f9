// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::message::ErrorResponse;
use crate::services::openai::UpstreamError;

pub const UNAVAILABLE_MESSAGE: &str =
    "GreenLazy is currently unavailable. Please try again later. 🌿";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("API key not configured")]
    MissingApiKey,

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
            }
            AppError::MissingApiKey => {
                (StatusCode::INTERNAL_SERVER_ERROR, "API key not configured".to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(err) => {
                // The real cause goes to the log only, never to the caller.
                tracing::error!(error = %err, "upstream request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, UNAVAILABLE_MESSAGE.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
