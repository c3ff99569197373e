//! Image encoding for generated assets.
//!
//! This module provides functionality for:
//! - Encoding RGBA canvases to PNG, with or without the alpha channel
//!
//! # Examples
//!
//! ```ignore
//! use logo_assets_core::encode::{encode_png, ColorMode};
//!
//! let canvas = DecodedImage::filled(1024, 1024, Color::WHITE);
//! let png_bytes = encode_png(&canvas, ColorMode::Rgb).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_png, ColorMode, EncodeError};
