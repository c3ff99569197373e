//! Image decoding and resizing.
//!
//! This module provides functionality for:
//! - Decoding source logos (PNG) into RGBA buffers
//! - Resizing to exact dimensions or shrinking to fit a bounding box
//!
//! All operations are synchronous and single-threaded.
//!
//! # Examples
//!
//! ```ignore
//! use logo_assets_core::decode::read_image;
//!
//! let logo = read_image(Path::new("playstore.png")).unwrap();
//! println!("Decoded {}x{} logo", logo.width, logo.height);
//! ```

mod png;
mod resize;
mod types;

pub use png::{decode_image, read_image};
pub use resize::{resize, shrink_to_fit};
pub use types::{DecodeError, DecodedImage};
