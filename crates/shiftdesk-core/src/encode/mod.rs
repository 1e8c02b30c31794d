//! Image encoding for transform results.
//!
//! Turns an RGBA [`DecodedImage`] into compressed bytes. JPEG is the default
//! output (quality 95); PNG keeps the alpha channel.
//!
//! ```ignore
//! use shiftdesk_core::encode::{encode_image, OutputFormat};
//!
//! let encoded = encode_image(&image, OutputFormat::default())?;
//! println!("Encoded {} bytes as {}", encoded.bytes.len(), encoded.mime_type());
//! ```

mod jpeg;
mod png;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::DecodedImage;

pub use jpeg::encode_jpeg;
pub use png::encode_png;

/// Default JPEG quality for exported images.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The codec rejected the data
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// The codec finished without writing any bytes
    #[error("Encoder produced no data")]
    NoData,
}

/// Compressed output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutputFormat {
    /// JPEG with quality 1-100. Transparent pixels are composited over black.
    Jpeg { quality: u8 },
    /// Lossless PNG with alpha.
    Png,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Jpeg {
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl OutputFormat {
    /// MIME type of the encoded bytes.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Jpeg { .. } => "image/jpeg",
            OutputFormat::Png => "image/png",
        }
    }
}

/// An encoded image ready to hand to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// Compressed image bytes.
    pub bytes: Vec<u8>,
    /// Format the bytes are encoded in.
    pub format: OutputFormat,
    /// Pixel width of the encoded image.
    pub width: u32,
    /// Pixel height of the encoded image.
    pub height: u32,
}

impl EncodedImage {
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

/// Encode an RGBA raster in the requested format.
pub fn encode_image(
    image: &DecodedImage,
    format: OutputFormat,
) -> Result<EncodedImage, EncodeError> {
    let bytes = match format {
        OutputFormat::Jpeg { quality } => {
            validate(&image.pixels, image.width, image.height, 4)?;
            encode_jpeg(&image.to_rgb_over_black(), image.width, image.height, quality)?
        }
        OutputFormat::Png => encode_png(&image.pixels, image.width, image.height)?,
    };

    if bytes.is_empty() {
        return Err(EncodeError::NoData);
    }

    Ok(EncodedImage {
        bytes,
        format,
        width: image.width,
        height: image.height,
    })
}

/// Check dimensions and buffer length for `channels` bytes per pixel.
pub(crate) fn validate(
    pixels: &[u8],
    width: u32,
    height: u32,
    channels: usize,
) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = width as usize * height as usize * channels;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(())
}
