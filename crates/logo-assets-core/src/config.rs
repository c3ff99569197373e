//! Filesystem layout of source logos and generated assets.
//!
//! Paths are fixed relative to the project root; only the root itself is
//! configurable (see [`ROOT_ENV_VAR`]).

use std::path::{Path, PathBuf};

use crate::manifest::SourceId;

/// Environment variable that overrides the project root.
pub const ROOT_ENV_VAR: &str = "LOGO_ASSETS_ROOT";

/// Logo directory relative to the project root.
const LOGO_DIR: [&str; 3] = ["assets", "images", "logo"];

/// Where sources are read from and assets are written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    /// Play-store logo with decorative bars (required).
    pub playstore: PathBuf,
    /// Text-free colored logo (optional).
    pub logo_no_text: PathBuf,
    /// Directory receiving generated PNGs.
    pub output_dir: PathBuf,
}

impl AssetPaths {
    /// Standard layout under `root`.
    pub fn from_project_root(root: impl AsRef<Path>) -> Self {
        let logo_dir = LOGO_DIR
            .iter()
            .fold(root.as_ref().to_path_buf(), |dir, part| dir.join(part));

        Self {
            playstore: logo_dir.join("appicons").join("playstore.png"),
            logo_no_text: logo_dir
                .join("imagesets")
                .join("ios")
                .join("seferet-logo-notext-colored@3x.png"),
            output_dir: logo_dir.join("generated"),
        }
    }

    /// Path of a source logo.
    pub fn source_path(&self, source: SourceId) -> &Path {
        match source {
            SourceId::Playstore => &self.playstore,
            SourceId::LogoNoText => &self.logo_no_text,
        }
    }

    /// Path of a generated file.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_project_root_layout() {
        let paths = AssetPaths::from_project_root("/work/app");

        assert_eq!(
            paths.playstore,
            PathBuf::from("/work/app/assets/images/logo/appicons/playstore.png")
        );
        assert_eq!(
            paths.logo_no_text,
            PathBuf::from(
                "/work/app/assets/images/logo/imagesets/ios/seferet-logo-notext-colored@3x.png"
            )
        );
        assert_eq!(
            paths.output_dir,
            PathBuf::from("/work/app/assets/images/logo/generated")
        );
    }

    #[test]
    fn test_source_and_output_paths() {
        let paths = AssetPaths::from_project_root("root");

        assert_eq!(paths.source_path(SourceId::Playstore), paths.playstore.as_path());
        assert_eq!(
            paths.source_path(SourceId::LogoNoText),
            paths.logo_no_text.as_path()
        );
        assert_eq!(
            paths.output_path("splash_dark.png"),
            PathBuf::from("root/assets/images/logo/generated/splash_dark.png")
        );
    }
}
