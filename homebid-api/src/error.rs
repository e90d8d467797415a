use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use homebid_core::repository::PersistenceError;

/// Every failure leaves the service as a `{"error": ...}` JSON body with
/// the matching status code.
#[derive(Debug)]
pub enum AppError {
    /// Request body absent or unparseable.
    NoInput,
    /// A required field is absent from the payload.
    MissingField(&'static str),
    /// A required field is present but not of the expected type.
    InvalidField(&'static str),
    /// The store could not persist a submission. Detail stays in the logs.
    Submission(PersistenceError),
    NotFound(String),
    MethodNotAllowed,
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NoInput => (
                StatusCode::BAD_REQUEST,
                "No input data provided".to_string(),
            ),
            AppError::MissingField(name) => {
                (StatusCode::BAD_REQUEST, format!("Missing field: {name}"))
            }
            AppError::InvalidField(name) => {
                (StatusCode::BAD_REQUEST, format!("Invalid field: {name}"))
            }
            AppError::Submission(err) => {
                tracing::error!("Failed to submit offer: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to submit offer".to_string(),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            AppError::Internal(err) => {
                tracing::error!("Internal Server Error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
