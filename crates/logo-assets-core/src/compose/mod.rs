//! Canvas compositions for icons and splash screens.
//!
//! Every composition allocates a fresh canvas of the requested size, scales
//! the logo, and centers it with alpha blending:
//!
//! - [`compose_padded_icon`] - bars cropped, shrink-to-fit inside a padded square
//! - [`compose_adaptive_foreground`] - bars cropped, shrink-to-fit inside the
//!   adaptive-icon safe area on a transparent canvas
//! - [`compose_splash`] - bars kept, logo resized to a fraction of the height
//! - [`compose_solid`] - flat background layer, no logo

mod icon;
mod splash;

use crate::decode::DecodedImage;
use crate::transform::{overlay_centered, TransformError};
use crate::Color;

pub use icon::{
    adaptive_logo_bound, compose_adaptive_foreground, compose_padded_icon, compose_solid,
    padded_logo_bound, ADAPTIVE_SAFE_AREA_PERCENT,
};
pub use splash::{compose_splash, splash_logo_size};

/// Where the logo landed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Placement {
    /// Margins as (left, top, right, bottom) for a canvas of the given size.
    pub fn margins(&self, canvas_width: u32, canvas_height: u32) -> (u32, u32, u32, u32) {
        (
            self.x,
            self.y,
            canvas_width - self.x - self.width,
            canvas_height - self.y - self.height,
        )
    }
}

/// A finished canvas plus the logo's bounding box on it.
#[derive(Debug, Clone)]
pub struct Composition {
    pub image: DecodedImage,
    pub placement: Placement,
}

/// Fill a `width` x `height` canvas with `background` and center `logo` on it.
fn place_on_canvas(
    width: u32,
    height: u32,
    background: Color,
    logo: &DecodedImage,
) -> Result<Composition, TransformError> {
    let mut image = DecodedImage::filled(width, height, background);
    let (x, y) = overlay_centered(&mut image, logo)?;
    let placement = Placement {
        x,
        y,
        width: logo.width,
        height: logo.height,
    };

    log::debug!(
        "placed {}x{} logo at ({}, {}) on {}x{} canvas, margins {:?}",
        logo.width,
        logo.height,
        x,
        y,
        width,
        height,
        placement.margins(width, height)
    );

    Ok(Composition { image, placement })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_margins() {
        let placement = Placement {
            x: 76,
            y: 130,
            width: 360,
            height: 252,
        };
        assert_eq!(placement.margins(512, 512), (76, 130, 76, 130));
    }

    #[test]
    fn test_place_on_canvas_records_placement() {
        let logo = DecodedImage::filled(3, 5, Color::DARK);
        let composition = place_on_canvas(10, 10, Color::WHITE, &logo).unwrap();

        assert_eq!(composition.image.width, 10);
        assert_eq!(composition.image.height, 10);
        assert_eq!(
            composition.placement,
            Placement {
                x: 3,
                y: 2,
                width: 3,
                height: 5
            }
        );
        assert_eq!(composition.image.pixel(3, 2), Some([26, 26, 26, 255]));
        assert_eq!(composition.image.pixel(0, 0), Some([255, 255, 255, 255]));
    }
}
