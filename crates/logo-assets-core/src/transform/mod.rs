//! Pixel-level transforms: decorative-bar cropping and centered compositing.
//!
//! # Coordinate System
//!
//! - Pixel coordinates, origin at the top-left corner
//! - Centering uses integer division, so an odd remainder leaves the extra
//!   pixel on the right/bottom side

mod crop;
mod overlay;

use thiserror::Error;

use crate::decode::DecodeError;

pub use crop::{
    crop_decorative_bars, crop_rect, decorative_bar_bounds, BAR_CROP_BOTTOM_PERCENT,
    BAR_CROP_TOP_PERCENT,
};
pub use overlay::{centered_offset, overlay_centered};

/// Errors raised while transforming or composing images.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The decorative-bar band of the source is empty.
    #[error("Source too small for decorative-bar crop: height {height}")]
    DegenerateCrop { height: u32 },

    /// A size, percentage or placement that cannot produce a valid canvas.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The underlying resize failed.
    #[error("Resize failed: {0}")]
    Resize(#[from] DecodeError),
}
