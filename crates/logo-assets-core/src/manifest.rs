//! The fixed list of generated assets.
//!
//! Each entry names its source logo, the composition to run with its
//! hardcoded parameters, the background, and the output file. Entries are
//! independent; order only affects progress output.

use crate::compose::{
    compose_adaptive_foreground, compose_padded_icon, compose_solid, compose_splash,
};
use crate::decode::DecodedImage;
use crate::encode::ColorMode;
use crate::transform::TransformError;
use crate::Color;

/// Source logos known to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceId {
    /// Square play-store logo with decorative bars.
    Playstore,
    /// Text-free colored logo.
    LogoNoText,
}

/// Progress grouping for output variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetGroup {
    AppIcon,
    AdaptiveIcon,
    Splash,
}

impl AssetGroup {
    pub fn title(self) -> &'static str {
        match self {
            AssetGroup::AppIcon => "app icon",
            AssetGroup::AdaptiveIcon => "Android adaptive icon",
            AssetGroup::Splash => "splash screens",
        }
    }
}

/// Composition applied to produce one asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetTransform {
    /// Bars cropped, logo fit inside `size - 2·padding`.
    PaddedIcon { size: u32, padding_percent: u32 },
    /// Bars cropped, logo fit inside the 60% safe area, transparent canvas.
    AdaptiveForeground { size: u32 },
    /// Flat square of the background color.
    SolidFill { size: u32 },
    /// Bars kept, logo height a percentage of canvas height.
    Splash {
        width: u32,
        height: u32,
        scale_percent: u32,
    },
}

impl AssetTransform {
    /// Output canvas dimensions.
    pub fn dimensions(&self) -> (u32, u32) {
        match *self {
            AssetTransform::PaddedIcon { size, .. }
            | AssetTransform::AdaptiveForeground { size }
            | AssetTransform::SolidFill { size } => (size, size),
            AssetTransform::Splash { width, height, .. } => (width, height),
        }
    }
}

/// One generated asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Human-readable label used in progress output.
    pub name: &'static str,
    pub group: AssetGroup,
    /// `None` for layers that don't draw a logo.
    pub source: Option<SourceId>,
    pub transform: AssetTransform,
    pub background: Color,
    pub color_mode: ColorMode,
    /// File name inside the output directory.
    pub file_name: &'static str,
}

impl ManifestEntry {
    /// Run this entry's composition.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidParameter` if the entry needs a source
    /// and none was given, or any error from the composition itself.
    pub fn render(&self, source: Option<&DecodedImage>) -> Result<DecodedImage, TransformError> {
        let composition = match self.transform {
            AssetTransform::SolidFill { size } => return Ok(compose_solid(size, self.background)),
            AssetTransform::PaddedIcon {
                size,
                padding_percent,
            } => compose_padded_icon(
                self.require_source(source)?,
                size,
                padding_percent,
                self.background,
            )?,
            AssetTransform::AdaptiveForeground { size } => {
                compose_adaptive_foreground(self.require_source(source)?, size)?
            }
            AssetTransform::Splash {
                width,
                height,
                scale_percent,
            } => compose_splash(
                self.require_source(source)?,
                width,
                height,
                scale_percent,
                self.background,
            )?,
        };

        Ok(composition.image)
    }

    fn require_source<'a>(
        &self,
        source: Option<&'a DecodedImage>,
    ) -> Result<&'a DecodedImage, TransformError> {
        source.ok_or_else(|| {
            TransformError::InvalidParameter(format!("{} needs a source image", self.name))
        })
    }
}

/// Every asset the app ships with.
pub static DEFAULT_MANIFEST: &[ManifestEntry] = &[
    ManifestEntry {
        name: "iOS app icon",
        group: AssetGroup::AppIcon,
        source: Some(SourceId::Playstore),
        transform: AssetTransform::PaddedIcon {
            size: 1024,
            padding_percent: 20,
        },
        background: Color::WHITE,
        color_mode: ColorMode::Rgba,
        file_name: "app_icon_1024.png",
    },
    ManifestEntry {
        name: "Android standard icon",
        group: AssetGroup::AppIcon,
        source: Some(SourceId::Playstore),
        transform: AssetTransform::PaddedIcon {
            size: 512,
            padding_percent: 15,
        },
        background: Color::WHITE,
        color_mode: ColorMode::Rgba,
        file_name: "app_icon_512.png",
    },
    ManifestEntry {
        name: "Adaptive foreground",
        group: AssetGroup::AdaptiveIcon,
        source: Some(SourceId::Playstore),
        transform: AssetTransform::AdaptiveForeground { size: 1024 },
        background: Color::TRANSPARENT,
        color_mode: ColorMode::Rgba,
        file_name: "adaptive_icon_foreground.png",
    },
    ManifestEntry {
        name: "Adaptive background",
        group: AssetGroup::AdaptiveIcon,
        source: None,
        transform: AssetTransform::SolidFill { size: 1024 },
        background: Color::WHITE,
        color_mode: ColorMode::Rgb,
        file_name: "adaptive_icon_background.png",
    },
    ManifestEntry {
        name: "Splash (light)",
        group: AssetGroup::Splash,
        source: Some(SourceId::Playstore),
        transform: AssetTransform::Splash {
            width: 1242,
            height: 2688,
            scale_percent: 30,
        },
        background: Color::WHITE,
        color_mode: ColorMode::Rgba,
        file_name: "splash_light.png",
    },
    ManifestEntry {
        name: "Splash (dark)",
        group: AssetGroup::Splash,
        source: Some(SourceId::Playstore),
        transform: AssetTransform::Splash {
            width: 1242,
            height: 2688,
            scale_percent: 30,
        },
        background: Color::DARK,
        color_mode: ColorMode::Rgba,
        file_name: "splash_dark.png",
    },
    ManifestEntry {
        name: "Splash (Android 12)",
        group: AssetGroup::Splash,
        source: Some(SourceId::Playstore),
        transform: AssetTransform::Splash {
            width: 288,
            height: 288,
            scale_percent: 65,
        },
        background: Color::TRANSPARENT,
        color_mode: ColorMode::Rgba,
        file_name: "splash_android12.png",
    },
];

/// Distinct sources referenced by `manifest`, in first-use order.
pub fn required_sources(manifest: &[ManifestEntry]) -> Vec<SourceId> {
    let mut sources = Vec::new();
    for id in manifest.iter().filter_map(|entry| entry.source) {
        if !sources.contains(&id) {
            sources.push(id);
        }
    }
    sources
}
