use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use qrlink_core::error::CoreError;
use serde::Serialize;

/// Client-facing message for any encoder failure.
pub const ENCODING_FAILED: &str = "Error generating QR code";

/// Client-facing message for unexpected server-side failures.
pub const INTERNAL_ERROR: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "message": ... }` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `qrlink_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body could not be read at all (e.g. it exceeds the
    /// body size limit). Keeps the rejection's own status code.
    #[error("Request body rejected: {0}")]
    Rejection(#[from] JsonRejection),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Encoding(err) => {
                    tracing::error!(error = %err, "Error generating QR code");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ENCODING_FAILED.to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::Rejection(rejection) => {
                tracing::debug!(error = %rejection, "Request body rejected");
                (rejection.status(), rejection.body_text())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
            }
        };

        (status, axum::Json(ErrorBody { message })).into_response()
    }
}
