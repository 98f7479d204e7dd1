use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ApiResponse;

/// Failure kinds surfaced by the lookup and listing endpoints.
///
/// None of these are retried; the caller owns retry policy.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller supplied something that is not an IP address.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The provider could not be reached (connection, DNS, TLS, body read).
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The provider answered with a non-success status.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The provider answered 2xx but the body did not decode.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Persistence error: {0}")]
    Persistence(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::InvalidInput(ref msg) => (
                StatusCode::BAD_REQUEST,
                msg.clone(),
                Some(vec![msg.clone()]),
            ),
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
            AppError::UpstreamUnavailable(ref msg) => {
                tracing::error!("Upstream unavailable: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Geolocation provider is unavailable".to_string(),
                    None,
                )
            }
            AppError::Parse(ref msg) => {
                tracing::error!("Parse error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            AppError::Persistence(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error occurred".to_string(),
                    None,
                )
            }
        };

        let body = Json(ApiResponse::<()>::error(Some(message), errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
