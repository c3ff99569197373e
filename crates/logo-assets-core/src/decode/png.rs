//! PNG decoding for source logos.

use std::io::Cursor;
use std::path::Path;

use image::error::ImageError;
use image::ImageReader;

use super::{DecodeError, DecodedImage};

/// Decode an image from bytes into RGBA pixel data.
///
/// The format is sniffed from the content; only formats enabled on the
/// `image` dependency (PNG) decode successfully.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a supported format.
/// Returns `DecodeError::CorruptedFile` if the image data is damaged.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader.decode().map_err(map_image_error)?;

    Ok(DecodedImage::from_rgba_image(img.into_rgba8()))
}

/// Read and decode the image file at `path`.
pub fn read_image(path: &Path) -> Result<DecodedImage, DecodeError> {
    let bytes = std::fs::read(path).map_err(|e| DecodeError::IoError(e.to_string()))?;
    decode_image(&bytes)
}

fn map_image_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        ImageError::IoError(e) => DecodeError::IoError(e.to_string()),
        other => DecodeError::CorruptedFile(other.to_string()),
    }
}
