//! Request input validation.
//!
//! The only constraint enforced here is presence: `text` must be a
//! non-empty JSON string. Length and character-set limits are left to the
//! encoder, which rejects what it cannot fit into a symbol.

use serde_json::Value;

use crate::error::CoreError;

/// Client-facing message for a missing or empty `text` field.
pub const TEXT_REQUIRED: &str = "Text is required";

/// Validate the raw `text` field of an encode request.
///
/// Absent, `null`, empty, and non-string values are all rejected with the
/// same [`TEXT_REQUIRED`] message. Whitespace-only strings are accepted.
pub fn validate_text(text: Option<Value>) -> Result<String, CoreError> {
    match text {
        Some(Value::String(s)) if !s.is_empty() => Ok(s),
        _ => Err(CoreError::Validation(TEXT_REQUIRED.to_string())),
    }
}
