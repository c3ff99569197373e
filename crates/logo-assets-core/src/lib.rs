//! Logo Assets Core - icon and splash generation
//!
//! This crate turns one source logo into the fixed set of app icons,
//! adaptive-icon layers and splash screens the mobile app ships with.
//!
//! # Module Structure
//!
//! - `decode` - PNG decoding and resizing
//! - `encode` - PNG encoding
//! - `transform` - decorative-bar crop and centered compositing
//! - `compose` - icon, adaptive-icon and splash canvases
//! - `manifest` - the fixed list of output variants
//! - `config` - source and output paths
//! - `pipeline` - runs the manifest end to end

pub mod compose;
pub mod config;
pub mod decode;
pub mod encode;
pub mod manifest;
pub mod pipeline;
pub mod transform;

pub use config::AssetPaths;
pub use decode::DecodedImage;
pub use manifest::{AssetGroup, AssetTransform, ManifestEntry, SourceId, DEFAULT_MANIFEST};
pub use pipeline::{generate_assets, GeneratedAsset, PipelineError, ProgressEvent};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Light background
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Dark-mode background
    pub const DARK: Color = Color::rgb(26, 26, 26);
    /// Fully transparent
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Opaque color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with full alpha
    pub const fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
