//! Splash screen composition.
//!
//! Unlike icons, splash screens keep the decorative bars: the full source
//! is resized so its height is a fixed share of the canvas height.

use super::{place_on_canvas, Composition};
use crate::decode::{resize, DecodedImage};
use crate::transform::TransformError;
use crate::Color;

/// Logo size for a splash canvas of height `canvas_height`.
///
/// Height is `floor(canvas_height·scale_percent/100)`; width follows the
/// source aspect ratio, truncated.
pub fn splash_logo_size(
    source_width: u32,
    source_height: u32,
    canvas_height: u32,
    scale_percent: u32,
) -> (u32, u32) {
    if source_height == 0 {
        return (0, 0);
    }
    let height = canvas_height as u64 * scale_percent as u64 / 100;
    let width = height * source_width as u64 / source_height as u64;
    (width as u32, height as u32)
}

/// Create a splash screen with the logo centered on a `width` x `height`
/// canvas.
///
/// The logo is resized (up or down) with Lanczos3 so that its height is
/// `scale_percent` of the canvas height. `background` may be transparent.
///
/// # Errors
///
/// Returns `TransformError::InvalidParameter` if the scaled logo is empty or
/// would not fit on the canvas.
pub fn compose_splash(
    source: &DecodedImage,
    width: u32,
    height: u32,
    scale_percent: u32,
    background: Color,
) -> Result<Composition, TransformError> {
    let (logo_width, logo_height) =
        splash_logo_size(source.width, source.height, height, scale_percent);

    if logo_width == 0 || logo_height == 0 {
        return Err(TransformError::InvalidParameter(format!(
            "{}% of {}px yields an empty logo",
            scale_percent, height
        )));
    }
    if logo_width > width || logo_height > height {
        return Err(TransformError::InvalidParameter(format!(
            "scaled logo {}x{} exceeds {}x{} canvas",
            logo_width, logo_height, width, height
        )));
    }

    let logo = resize(source, logo_width, logo_height)?;
    place_on_canvas(width, height, background, &logo)
}
