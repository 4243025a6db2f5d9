use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use billsplit_core::ValidationError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`ValidationError`] for domain errors and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce the
/// `{ "success": false, "error": ... }` JSON error contract.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A validation error from `billsplit_core`; its display text is
    /// the client-facing message.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request body was absent, not JSON, or not `application/json`.
    #[error("Request body must be JSON")]
    MalformedBody,

    /// One or more of the three required fields was absent.
    #[error("Missing required fields: bill_amount, tip_percentage, split_count")]
    MissingFields,

    /// An unexpected internal failure with a human-readable detail.
    /// The detail is logged, never sent to the client.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::MalformedBody | ApiError::MissingFields => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "success": false,
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
