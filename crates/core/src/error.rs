use crate::encoder::EncodeError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Encoding failed: {0}")]
    Encoding(#[from] EncodeError),
}
