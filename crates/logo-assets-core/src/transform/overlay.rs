//! Centered alpha compositing of a logo onto a canvas.

use super::TransformError;
use crate::decode::DecodedImage;

/// Top-left offset that centers `inner` within `outer` (integer division).
///
/// Returns `None` if `inner` does not fit.
pub fn centered_offset(outer: (u32, u32), inner: (u32, u32)) -> Option<(u32, u32)> {
    let x = outer.0.checked_sub(inner.0)? / 2;
    let y = outer.1.checked_sub(inner.1)? / 2;
    Some((x, y))
}

/// Composite `logo` centered on `canvas`, blending with the logo's alpha.
///
/// Returns the offset the logo was placed at.
///
/// # Errors
///
/// Returns `TransformError::InvalidParameter` if the logo is larger than the
/// canvas on either axis.
pub fn overlay_centered(
    canvas: &mut DecodedImage,
    logo: &DecodedImage,
) -> Result<(u32, u32), TransformError> {
    let (x, y) = centered_offset((canvas.width, canvas.height), (logo.width, logo.height))
        .ok_or_else(|| {
            TransformError::InvalidParameter(format!(
                "logo {}x{} does not fit canvas {}x{}",
                logo.width, logo.height, canvas.width, canvas.height
            ))
        })?;

    let mut base = canvas
        .to_rgba_image()
        .ok_or_else(|| TransformError::InvalidParameter("canvas buffer mismatch".to_string()))?;
    let top = logo
        .to_rgba_image()
        .ok_or_else(|| TransformError::InvalidParameter("logo buffer mismatch".to_string()))?;

    image::imageops::overlay(&mut base, &top, x as i64, y as i64);
    *canvas = DecodedImage::from_rgba_image(base);

    Ok((x, y))
}
