use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use historial_core::StoreError;
use serde::Serialize;

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

/// JSON error response structure.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// The central error type used for HTTP responses.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("store error")]
    Store(
        #[source]
        #[from]
        StoreError,
    ),

    /// The blocking task running a store call panicked or was cancelled.
    #[error("internal error")]
    Join(
        #[source]
        #[from]
        tokio::task::JoinError,
    ),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Store(err @ StoreError::ConstraintViolation { .. }) => {
                (StatusCode::CONFLICT, err.to_string())
            }
            ApiError::Store(err) => {
                tracing::error!(error = %err, "store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            ApiError::Join(err) => {
                tracing::error!(error = %err, "store task failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
