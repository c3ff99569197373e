//! Image cropping operations.
//!
//! Crops are expressed in pixel coordinates with the origin at the top-left
//! corner. The decorative-bar crop is a fixed fractional band on top of the
//! generic rectangle crop.
//!
//! # Example
//!
//! ```ignore
//! // Strip the top and bottom bars from a play-store logo
//! let core_logo = crop_decorative_bars(&logo)?;
//! ```

use super::TransformError;
use crate::decode::DecodedImage;

/// Top edge of the kept band, in percent of the source height.
pub const BAR_CROP_TOP_PERCENT: u32 = 15;
/// Bottom edge of the kept band, in percent of the source height.
pub const BAR_CROP_BOTTOM_PERCENT: u32 = 85;

/// Crop a pixel rectangle out of an image.
///
/// The rectangle is clamped to the image bounds. Returns `None` when the
/// clamped region is empty.
pub fn crop_rect(
    image: &DecodedImage,
    left: u32,
    top: u32,
    width: u32,
    height: u32,
) -> Option<DecodedImage> {
    let left = left.min(image.width);
    let top = top.min(image.height);
    let right = left.saturating_add(width).min(image.width);
    let bottom = top.saturating_add(height).min(image.height);

    let out_width = right - left;
    let out_height = bottom - top;
    if out_width == 0 || out_height == 0 {
        return None;
    }

    // Fast path: full crop returns a clone
    if out_width == image.width && out_height == image.height {
        return Some(image.clone());
    }

    let src_stride = image.width as usize * 4;
    let row_len = out_width as usize * 4;
    let mut output = Vec::with_capacity(row_len * out_height as usize);

    // Copy pixel data row by row
    for y in top..bottom {
        let start = y as usize * src_stride + left as usize * 4;
        output.extend_from_slice(&image.pixels[start..start + row_len]);
    }

    Some(DecodedImage {
        width: out_width,
        height: out_height,
        pixels: output,
    })
}

/// Rows kept by the decorative-bar crop: `floor(0.15·H)..floor(0.85·H)`.
pub fn decorative_bar_bounds(height: u32) -> (u32, u32) {
    let h = height as u64;
    let top = h * BAR_CROP_TOP_PERCENT as u64 / 100;
    let bottom = h * BAR_CROP_BOTTOM_PERCENT as u64 / 100;
    (top as u32, bottom as u32)
}

/// Remove the decorative bars from the top and bottom of a logo.
///
/// Keeps the middle 70% of the height and the full width. The bounds are
/// fixed fractions of the height, not detected from pixel content.
///
/// # Errors
///
/// Returns `TransformError::DegenerateCrop` if the kept band is empty
/// (sources shorter than two rows).
pub fn crop_decorative_bars(image: &DecodedImage) -> Result<DecodedImage, TransformError> {
    let (top, bottom) = decorative_bar_bounds(image.height);
    if top >= bottom || image.width == 0 {
        return Err(TransformError::DegenerateCrop {
            height: image.height,
        });
    }

    crop_rect(image, 0, top, image.width, bottom - top).ok_or(TransformError::DegenerateCrop {
        height: image.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image where each pixel's red channel encodes its row.
    fn test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((y % 256) as u8); // R
                pixels.push((x % 256) as u8); // G
                pixels.push(0); // B
                pixels.push(255); // A
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_full_rect_crop() {
        let img = test_image(20, 10);
        let result = crop_rect(&img, 0, 0, 20, 10).unwrap();

        assert_eq!(result, img);
    }

    #[test]
    fn test_rect_crop_pixel_values_preserved() {
        let img = test_image(10, 10);
        let result = crop_rect(&img, 3, 4, 2, 2).unwrap();

        assert_eq!(result.width, 2);
        assert_eq!(result.height, 2);
        assert_eq!(result.pixel(0, 0), Some([4, 3, 0, 255]));
        assert_eq!(result.pixel(1, 1), Some([5, 4, 0, 255]));
    }

    #[test]
    fn test_rect_crop_clamps_to_bounds() {
        let img = test_image(10, 10);
        let result = crop_rect(&img, 8, 8, 5, 5).unwrap();

        assert_eq!(result.width, 2);
        assert_eq!(result.height, 2);
    }

    #[test]
    fn test_rect_crop_outside_is_none() {
        let img = test_image(10, 10);
        assert!(crop_rect(&img, 10, 0, 5, 5).is_none());
        assert!(crop_rect(&img, 0, 0, 0, 5).is_none());
    }

    #[test]
    fn test_bar_bounds_thousand_rows() {
        assert_eq!(decorative_bar_bounds(1000), (150, 850));
    }

    #[test]
    fn test_bar_bounds_truncate() {
        // 0.15 * 7 = 1.05, 0.85 * 7 = 5.95
        assert_eq!(decorative_bar_bounds(7), (1, 5));
    }

    #[test]
    fn test_crop_bars_keeps_middle_band() {
        let img = test_image(40, 100);
        let result = crop_decorative_bars(&img).unwrap();

        assert_eq!(result.width, 40);
        assert_eq!(result.height, 70);
        // First kept row is row 15 of the source
        assert_eq!(result.pixel(0, 0), Some([15, 0, 0, 255]));
        // Last kept row is row 84
        assert_eq!(result.pixel(39, 69), Some([84, 39, 0, 255]));
    }

    #[test]
    fn test_crop_bars_two_rows() {
        let img = test_image(5, 2);
        let result = crop_decorative_bars(&img).unwrap();

        assert_eq!(result.height, 1);
        assert_eq!(result.pixel(0, 0), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_crop_bars_degenerate() {
        let img = test_image(5, 1);
        assert!(matches!(
            crop_decorative_bars(&img),
            Err(TransformError::DegenerateCrop { height: 1 })
        ));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn create_test_image(width: u32, height: u32) -> DecodedImage {
        let pixels = (0..width * height)
            .flat_map(|i| {
                let v = (i % 256) as u8;
                [v, v, v, 255]
            })
            .collect();
        DecodedImage::new(width, height, pixels)
    }

    proptest! {
        /// Property: bar crop height is floor(0.85H) - floor(0.15H), width unchanged.
        #[test]
        fn prop_bar_crop_dimensions(
            (width, height) in (1u32..=64, 2u32..=400),
        ) {
            let img = create_test_image(width, height);
            let result = crop_decorative_bars(&img).unwrap();

            let expected = height * 85 / 100 - height * 15 / 100;
            prop_assert_eq!(result.width, width);
            prop_assert_eq!(result.height, expected);
            prop_assert_eq!(result.pixels.len(), (width * expected * 4) as usize);
        }

        /// Property: output dimensions don't exceed input dimensions.
        #[test]
        fn prop_rect_bounded_by_input(
            (width, height) in (1u32..=64, 1u32..=64),
            (left, top, w, h) in (0u32..=80, 0u32..=80, 0u32..=80, 0u32..=80),
        ) {
            let img = create_test_image(width, height);
            if let Some(result) = crop_rect(&img, left, top, w, h) {
                prop_assert!(result.width <= width);
                prop_assert!(result.height <= height);
                prop_assert_eq!(
                    result.pixels.len(),
                    (result.width * result.height * 4) as usize
                );
            }
        }

        /// Property: cropping is deterministic.
        #[test]
        fn prop_crop_is_deterministic(
            (width, height) in (1u32..=64, 2u32..=64),
        ) {
            let img = create_test_image(width, height);
            let a = crop_decorative_bars(&img).unwrap();
            let b = crop_decorative_bars(&img).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
