//! App icon and adaptive-icon layer compositions.

use super::{place_on_canvas, Composition};
use crate::decode::{shrink_to_fit, DecodedImage};
use crate::transform::{crop_decorative_bars, TransformError};
use crate::Color;

/// Share of the adaptive-icon canvas the logo may occupy.
pub const ADAPTIVE_SAFE_AREA_PERCENT: u32 = 60;

/// Edge of the square the logo must fit in: `S - 2·floor(S·P/100)`.
///
/// # Errors
///
/// Returns `TransformError::InvalidParameter` if the padding leaves no room.
pub fn padded_logo_bound(size: u32, padding_percent: u32) -> Result<u32, TransformError> {
    let padding = (size as u64 * padding_percent as u64 / 100) as u32;
    size.checked_sub(padding.saturating_mul(2))
        .filter(|bound| *bound > 0)
        .ok_or_else(|| {
            TransformError::InvalidParameter(format!(
                "padding {}% leaves no room on a {}px canvas",
                padding_percent, size
            ))
        })
}

/// Edge of the adaptive-icon safe area: `floor(S·60/100)`.
pub fn adaptive_logo_bound(size: u32) -> u32 {
    (size as u64 * ADAPTIVE_SAFE_AREA_PERCENT as u64 / 100) as u32
}

/// Create a square icon with the logo centered inside a padded margin.
///
/// The decorative bars are removed first, then the logo is shrunk (never
/// enlarged) to fit the padded square with Lanczos3 and composited with
/// its alpha over an opaque `background`.
pub fn compose_padded_icon(
    source: &DecodedImage,
    size: u32,
    padding_percent: u32,
    background: Color,
) -> Result<Composition, TransformError> {
    let bound = padded_logo_bound(size, padding_percent)?;
    compose_cropped_fit(source, size, bound, background.opaque())
}

/// Create the adaptive-icon foreground: transparent canvas, logo inside the
/// central safe area.
pub fn compose_adaptive_foreground(
    source: &DecodedImage,
    size: u32,
) -> Result<Composition, TransformError> {
    let bound = adaptive_logo_bound(size);
    if bound == 0 {
        return Err(TransformError::InvalidParameter(format!(
            "{}px canvas has no safe area",
            size
        )));
    }
    compose_cropped_fit(source, size, bound, Color::TRANSPARENT)
}

/// Flat square layer of a single color.
pub fn compose_solid(size: u32, color: Color) -> DecodedImage {
    DecodedImage::filled(size, size, color)
}

fn compose_cropped_fit(
    source: &DecodedImage,
    size: u32,
    bound: u32,
    background: Color,
) -> Result<Composition, TransformError> {
    let logo = crop_decorative_bars(source)?;
    let logo = shrink_to_fit(&logo, bound, bound)?;
    place_on_canvas(size, size, background, &logo)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn opaque_logo(width: u32, height: u32) -> DecodedImage {
        DecodedImage::filled(width, height, Color::rgba(200, 40, 40, 255))
    }

    proptest! {
        /// Property: the logo fits the padded bound and is centered within one pixel.
        #[test]
        fn prop_padded_icon_bounded_and_centered(
            (width, height) in (20u32..=300, 20u32..=300),
            size in 32u32..=256,
            padding in 0u32..=40,
        ) {
            let source = opaque_logo(width, height);
            let icon = compose_padded_icon(&source, size, padding, Color::WHITE).unwrap();
            let bound = padded_logo_bound(size, padding).unwrap();
            let p = icon.placement;

            prop_assert_eq!((icon.image.width, icon.image.height), (size, size));
            prop_assert!(p.width <= bound && p.height <= bound);

            let (left, top, right, bottom) = p.margins(size, size);
            prop_assert!(right >= left && right - left <= 1);
            prop_assert!(bottom >= top && bottom - top <= 1);
            if size * padding / 100 > 0 {
                prop_assert!(left > 0 && top > 0);
            }
        }
    }
}
