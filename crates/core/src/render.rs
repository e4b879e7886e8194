//! Rasterization of QR symbols into PNG data-URIs.
//!
//! The module matrix comes from `qrcodegen`; this module only decides how
//! each module maps to pixels (scale, quiet zone) and how the resulting
//! PNG is wrapped for transport.

use std::fmt;
use std::io::Cursor;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{ImageBuffer, ImageFormat, Luma};
use qrcodegen::{QrCode, QrCodeEcc};

use crate::encoder::EncodeError;
use crate::error::CoreError;

/// MIME type of every image this crate produces.
pub const PNG_MIME: &str = "image/png";

/// Largest accepted pixels-per-module value.
pub const MAX_SCALE: u32 = 32;

/// Largest accepted quiet zone, in modules.
pub const MAX_MARGIN: u32 = 16;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

// ---------------------------------------------------------------------------
// Error correction
// ---------------------------------------------------------------------------

/// QR error correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    /// ~7% of codewords can be restored.
    Low,
    /// ~15% of codewords can be restored.
    #[default]
    Medium,
    /// ~25% of codewords can be restored.
    Quartile,
    /// ~30% of codewords can be restored.
    High,
}

impl ErrorCorrection {
    pub(crate) fn to_qrcodegen(self) -> QrCodeEcc {
        match self {
            Self::Low => QrCodeEcc::Low,
            Self::Medium => QrCodeEcc::Medium,
            Self::Quartile => QrCodeEcc::Quartile,
            Self::High => QrCodeEcc::High,
        }
    }
}

impl FromStr for ErrorCorrection {
    type Err = CoreError;

    /// Accepts the single-letter form (`L`, `M`, `Q`, `H`) or the full name,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(Self::Low),
            "m" | "medium" => Ok(Self::Medium),
            "q" | "quartile" => Ok(Self::Quartile),
            "h" | "high" => Ok(Self::High),
            other => Err(CoreError::Validation(format!(
                "Unknown error correction level: '{other}'. Valid levels: L, M, Q, H"
            ))),
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::Low => "L",
            Self::Medium => "M",
            Self::Quartile => "Q",
            Self::High => "H",
        };
        f.write_str(letter)
    }
}

// ---------------------------------------------------------------------------
// Render options
// ---------------------------------------------------------------------------

/// How a symbol is turned into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub error_correction: ErrorCorrection,
    /// Pixels per module edge.
    pub scale: u32,
    /// Quiet zone width, in modules.
    pub margin: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            error_correction: ErrorCorrection::Medium,
            scale: 4,
            margin: 4,
        }
    }
}

impl RenderOptions {
    /// Check that scale and margin are within the accepted ranges.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.scale == 0 || self.scale > MAX_SCALE {
            return Err(CoreError::Validation(format!(
                "QR scale must be between 1 and {MAX_SCALE}, got {}",
                self.scale
            )));
        }
        if self.margin > MAX_MARGIN {
            return Err(CoreError::Validation(format!(
                "QR margin must be at most {MAX_MARGIN}, got {}",
                self.margin
            )));
        }
        Ok(())
    }

    /// Side length in pixels of the image rendered for a symbol of
    /// `symbol_size` modules. Saturates instead of overflowing.
    pub fn image_side(&self, symbol_size: u32) -> u32 {
        symbol_size
            .saturating_add(self.margin.saturating_mul(2))
            .saturating_mul(self.scale)
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render `qr` as an 8-bit grayscale PNG.
///
/// Dark modules are black, light modules and the quiet zone are white.
/// Options outside the accepted ranges are rejected before any allocation.
pub fn render_png(qr: &QrCode, options: &RenderOptions) -> Result<Vec<u8>, EncodeError> {
    options
        .validate()
        .map_err(|e| EncodeError::InvalidOptions(e.to_string()))?;

    let scale = options.scale;
    // Bounded by MAX_MARGIN after validation.
    let margin = options.margin as i32;
    let side = options.image_side(qr.size() as u32);

    let img = ImageBuffer::from_fn(side, side, |x, y| {
        let module_x = (x / scale) as i32 - margin;
        let module_y = (y / scale) as i32 - margin;
        // get_module returns false outside the symbol, which covers the quiet zone.
        if qr.get_module(module_x, module_y) {
            DARK
        } else {
            LIGHT
        }
    });

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Wrap raw bytes as a Base64 data-URI with the given MIME type.
pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Whether `s` starts like a Base64 image data-URI
/// (`data:image/<subtype>;base64,`).
pub fn is_image_data_uri(s: &str) -> bool {
    let Some(rest) = s.strip_prefix("data:image/") else {
        return false;
    };
    let Some((subtype, _)) = rest.split_once(";base64,") else {
        return false;
    };
    !subtype.is_empty() && subtype.chars().all(|c| c.is_ascii_alphabetic())
}
