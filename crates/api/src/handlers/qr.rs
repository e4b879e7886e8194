//! Handler for the `/qr` resource.
//!
//! Validates the incoming text, hands it to the configured
//! [`QrEncoder`](qrlink_core::encoder::QrEncoder), and returns the
//! resulting data-URI.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use qrlink_core::error::CoreError;
use qrlink_core::validation::validate_text;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/qr`.
///
/// `text` is kept as a raw JSON value so that wrong types are reported as a
/// missing field rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct EncodeRequest {
    #[serde(default)]
    pub text: Option<Value>,
}

/// Successful response body for `POST /api/qr`.
#[derive(Debug, Serialize)]
pub struct EncodeResponse {
    pub success: bool,
    pub text: String,
    /// `data:image/png;base64,...`
    pub qr: String,
}

/// POST /api/qr
///
/// Generate a QR code for `text` and return it as a Base64 data-URI.
/// Returns 400 when `text` is missing or empty, 500 when encoding fails.
/// Body rejections other than content-type or JSON errors (e.g. 413 for an
/// oversized body) are passed through with their own status.
pub async fn generate_qr(
    State(state): State<AppState>,
    payload: Result<Json<EncodeRequest>, JsonRejection>,
) -> AppResult<Json<EncodeResponse>> {
    let input = match payload {
        Ok(Json(input)) => input,
        // A non-JSON or malformed body carries no text; treat it as `{}`.
        Err(
            rejection @ (JsonRejection::MissingJsonContentType(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::JsonDataError(_)),
        ) => {
            tracing::debug!(error = %rejection, "Unreadable encode request body");
            EncodeRequest::default()
        }
        Err(rejection) => return Err(AppError::from(rejection)),
    };

    let text = validate_text(input.text)?;

    let qr = state
        .encoder
        .encode_to_data_uri(&text)
        .await
        .map_err(CoreError::from)?;

    Ok(Json(EncodeResponse {
        success: true,
        text,
        qr,
    }))
}
