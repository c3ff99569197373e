//! Image resizing functions for logo scaling.
//!
//! Provides the resize operations used by the compositions, built on the
//! `image` crate's algorithms. All functions return new `DecodedImage`
//! instances without modifying the input.

use image::imageops::FilterType;
use image::{ImageBuffer, Rgba};

use super::{DecodeError, DecodedImage};

/// Resampling filter for every resize.
const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// RGBA with color channels multiplied by alpha, all in `0.0..=1.0`.
type PremultipliedImage = ImageBuffer<Rgba<f32>, Vec<f32>>;

/// Resize an image to exact dimensions with Lanczos3.
///
/// Resampling runs on premultiplied alpha, so the color stored in fully
/// transparent pixels never bleeds into the visible edge of the result.
///
/// # Arguments
///
/// * `image` - The source image to resize
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if a target dimension is zero.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let premultiplied = premultiply(image)
        .ok_or_else(|| DecodeError::CorruptedFile("Pixel buffer size mismatch".to_string()))?;

    let resized = image::imageops::resize(&premultiplied, width, height, RESAMPLE_FILTER);

    Ok(unpremultiply(&resized))
}

fn premultiply(image: &DecodedImage) -> Option<PremultipliedImage> {
    let data: Vec<f32> = image
        .pixels
        .chunks_exact(4)
        .flat_map(|px| {
            let alpha = px[3] as f32 / 255.0;
            [
                px[0] as f32 / 255.0 * alpha,
                px[1] as f32 / 255.0 * alpha,
                px[2] as f32 / 255.0 * alpha,
                alpha,
            ]
        })
        .collect();
    ImageBuffer::from_raw(image.width, image.height, data)
}

fn unpremultiply(image: &PremultipliedImage) -> DecodedImage {
    let (width, height) = image.dimensions();
    let pixels: Vec<u8> = image
        .pixels()
        .flat_map(|&Rgba([r, g, b, a])| {
            let alpha = (a.clamp(0.0, 1.0) * 255.0).round() as u8;
            if alpha == 0 {
                return [0; 4];
            }
            // Lanczos overshoot can push a channel past its alpha
            let a = a.clamp(0.0, 1.0);
            let channel = |c: f32| ((c / a).clamp(0.0, 1.0) * 255.0).round() as u8;
            [channel(r), channel(g), channel(b), alpha]
        })
        .collect();
    DecodedImage::new(width, height, pixels)
}

/// Shrink an image to fit within a `max_width` x `max_height` box while
/// preserving aspect ratio.
///
/// Images that already fit are returned unchanged; this never upscales.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the box has a zero dimension.
pub fn shrink_to_fit(
    image: &DecodedImage,
    max_width: u32,
    max_height: u32,
) -> Result<DecodedImage, DecodeError> {
    if max_width == 0 || max_height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    // If already fits, just clone
    if image.width <= max_width && image.height <= max_height {
        return Ok(image.clone());
    }

    let (new_width, new_height) =
        calculate_fit_dimensions(image.width, image.height, max_width, max_height);

    resize(image, new_width, new_height)
}

/// Calculate dimensions to fit within the box while preserving aspect ratio.
///
/// When the box is at least as wide (relative to its height) as the image,
/// the height takes the box height; otherwise the width takes the box width.
/// The other axis is whichever of floor/ceil of the exact value keeps the
/// aspect ratio closest, floor on a tie, and is at least 1.
pub(crate) fn calculate_fit_dimensions(
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let aspect = width as f64 / height as f64;
    let (bw, bh) = (max_width as f64, max_height as f64);

    if max_width as u64 * height as u64 >= width as u64 * max_height as u64 {
        // Height-limited
        let new_width = closest_aspect(bh * aspect, |n| (aspect - n / bh).abs());
        (new_width.min(max_width), max_height)
    } else {
        // Width-limited
        let new_height = closest_aspect(bw / aspect, |n| {
            if n == 0.0 {
                0.0
            } else {
                (aspect - bw / n).abs()
            }
        });
        (max_width, new_height.min(max_height))
    }
}

/// Pick floor or ceil of `exact` by smallest aspect error, never below 1.
fn closest_aspect(exact: f64, error: impl Fn(f64) -> f64) -> u32 {
    let (floor, ceil) = (exact.floor(), exact.ceil());
    let best = if error(ceil) < error(floor) { ceil } else { floor };
    (best as u32).max(1)
}
