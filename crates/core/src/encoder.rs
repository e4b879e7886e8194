//! The QR encoding collaborator.
//!
//! Defines [`QrEncoder`], the seam the HTTP layer calls through, along with
//! [`EncodeError`] and the default [`PngDataUriEncoder`].

use async_trait::async_trait;
use qrcodegen::QrCode;

use crate::error::CoreError;
use crate::render::{render_png, to_data_uri, RenderOptions, PNG_MIME};

/// Errors that can occur while turning text into a data-URI.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The text does not fit into the largest QR version at the configured
    /// error correction level.
    #[error("Text does not fit into a QR symbol: {0}")]
    DataTooLong(#[from] qrcodegen::DataTooLong),

    /// The render options are outside the accepted ranges.
    #[error("Invalid render options: {0}")]
    InvalidOptions(String),

    /// The raster image could not be encoded.
    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// The encoder backend failed for any other reason (e.g. the blocking
    /// task panicked or was cancelled).
    #[error("Encoder backend failure: {0}")]
    Backend(String),
}

/// Turns text into an image data-URI.
///
/// Implementations must be safe to share across concurrent requests; the
/// API keeps one behind an `Arc` in its state.
#[async_trait]
pub trait QrEncoder: Send + Sync {
    /// Encode `text` and return a `data:image/...;base64,...` string.
    async fn encode_to_data_uri(&self, text: &str) -> Result<String, EncodeError>;
}

/// Default encoder producing `data:image/png;base64,...` strings.
///
/// Symbol construction and PNG compression are CPU-bound, so each call runs
/// on tokio's blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngDataUriEncoder {
    options: RenderOptions,
}

impl PngDataUriEncoder {
    /// Build an encoder, rejecting options outside the accepted ranges.
    pub fn new(options: RenderOptions) -> Result<Self, CoreError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

#[async_trait]
impl QrEncoder for PngDataUriEncoder {
    async fn encode_to_data_uri(&self, text: &str) -> Result<String, EncodeError> {
        let text = text.to_owned();
        let options = self.options;

        tokio::task::spawn_blocking(move || encode_png_data_uri(&text, &options))
            .await
            .map_err(|e| EncodeError::Backend(format!("encoding task failed: {e}")))?
    }
}

/// Synchronous encode path: text → symbol → PNG → data-URI.
pub fn encode_png_data_uri(text: &str, options: &RenderOptions) -> Result<String, EncodeError> {
    let qr = QrCode::encode_text(text, options.error_correction.to_qrcodegen())?;
    let png = render_png(&qr, options)?;

    tracing::debug!(
        text_len = text.len(),
        symbol_size = qr.size(),
        png_bytes = png.len(),
        "Rendered QR code"
    );

    Ok(to_data_uri(PNG_MIME, &png))
}
