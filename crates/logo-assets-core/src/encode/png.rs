//! PNG encoding for generated assets.
//!
//! Canvases are always held as RGBA; the flat adaptive-icon background is
//! written without its alpha channel, everything else keeps it.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::decode::DecodedImage;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Channel layout of the written PNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Opaque RGB, alpha dropped.
    Rgb,
    /// RGB with alpha channel.
    Rgba,
}

/// Encode an RGBA image to PNG bytes.
///
/// # Arguments
///
/// * `image` - RGBA source (4 bytes per pixel, row-major order)
/// * `mode` - Whether to keep the alpha channel in the output
///
/// # Returns
///
/// PNG-encoded bytes on success, or an error if encoding fails.
/// Encoding is deterministic: identical input yields identical bytes.
pub fn encode_png(image: &DecodedImage, mode: ColorMode) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (image.width, image.height);

    // Validate dimensions
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    // Validate pixel data length
    let expected_len = (width as usize) * (height as usize) * 4;
    if image.pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: image.pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);

    let result = match mode {
        ColorMode::Rgba => {
            encoder.write_image(&image.pixels, width, height, ExtendedColorType::Rgba8)
        }
        ColorMode::Rgb => {
            let rgb = strip_alpha(&image.pixels);
            encoder.write_image(&rgb, width, height, ExtendedColorType::Rgb8)
        }
    };
    result.map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

fn strip_alpha(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }
    rgb
}
