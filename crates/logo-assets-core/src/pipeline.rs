//! Runs a manifest end to end: check sources, decode, compose, write.
//!
//! The run is sequential. Every source the manifest references is checked
//! before anything touches the output directory, then decoded once and shared
//! read-only by all variants that use it. The first failing variant stops
//! the run; files written before it are left in place.

use std::collections::BTreeMap;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::AssetPaths;
use crate::decode::{read_image, DecodeError, DecodedImage};
use crate::encode::{encode_png, EncodeError};
use crate::manifest::{required_sources, AssetGroup, ManifestEntry, SourceId};
use crate::transform::TransformError;

/// Errors that stop asset generation.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A source logo referenced by the manifest does not exist.
    #[error("Source image not found: {}", path.display())]
    MissingSource { path: PathBuf },

    /// A source logo exists but could not be decoded.
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    /// The output directory could not be created.
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Composition failed for a variant.
    #[error("Failed to render {variant}: {source}")]
    Transform {
        variant: &'static str,
        #[source]
        source: TransformError,
    },

    /// PNG encoding failed for a variant.
    #[error("Failed to encode {variant}: {source}")]
    Encode {
        variant: &'static str,
        #[source]
        source: EncodeError,
    },

    /// Writing a generated file failed.
    #[error("Failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A file produced by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAsset {
    pub name: &'static str,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Progress notifications emitted while the manifest runs.
#[derive(Debug, Clone, Copy)]
pub enum ProgressEvent<'a> {
    /// The first variant of a group is about to be generated.
    GroupStarted(AssetGroup),
    /// A variant was written to disk.
    AssetWritten(&'a GeneratedAsset),
}

/// Generate every asset in `manifest`.
///
/// Returns the written files in manifest order. `on_progress` is called
/// before each group and after each write.
///
/// # Errors
///
/// - `MissingSource` before any output is produced
/// - `Decode` if a source exists but isn't a readable image
/// - `CreateOutputDir` / `WriteOutput` on I/O failure
/// - `Transform` / `Encode` naming the variant that failed
pub fn generate_assets<F>(
    paths: &AssetPaths,
    manifest: &[ManifestEntry],
    mut on_progress: F,
) -> Result<Vec<GeneratedAsset>, PipelineError>
where
    F: FnMut(ProgressEvent<'_>),
{
    let sources = load_sources(paths, manifest)?;

    std::fs::create_dir_all(&paths.output_dir).map_err(|source| {
        PipelineError::CreateOutputDir {
            path: paths.output_dir.clone(),
            source,
        }
    })?;
    log::info!("output directory: {}", paths.output_dir.display());

    let mut written = Vec::with_capacity(manifest.len());
    let mut current_group = None;

    for entry in manifest {
        if current_group != Some(entry.group) {
            current_group = Some(entry.group);
            on_progress(ProgressEvent::GroupStarted(entry.group));
        }

        let asset = generate_one(paths, entry, &sources)?;
        on_progress(ProgressEvent::AssetWritten(&asset));
        written.push(asset);
    }

    Ok(written)
}

/// Check every required source exists, then decode each one once.
fn load_sources(
    paths: &AssetPaths,
    manifest: &[ManifestEntry],
) -> Result<BTreeMap<SourceId, DecodedImage>, PipelineError> {
    let required = required_sources(manifest);

    for id in &required {
        let path = paths.source_path(*id);
        if !path.is_file() {
            return Err(PipelineError::MissingSource {
                path: path.to_path_buf(),
            });
        }
    }

    let mut sources = BTreeMap::new();
    for id in required {
        let path = paths.source_path(id);
        let image = read_image(path).map_err(|source| PipelineError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "decoded {:?} from {} ({}x{})",
            id,
            path.display(),
            image.width,
            image.height
        );
        sources.insert(id, image);
    }

    Ok(sources)
}

fn generate_one(
    paths: &AssetPaths,
    entry: &ManifestEntry,
    sources: &BTreeMap<SourceId, DecodedImage>,
) -> Result<GeneratedAsset, PipelineError> {
    let source = entry.source.and_then(|id| sources.get(&id));

    let image = entry
        .render(source)
        .map_err(|source| PipelineError::Transform {
            variant: entry.name,
            source,
        })?;

    let bytes = encode_png(&image, entry.color_mode).map_err(|source| PipelineError::Encode {
        variant: entry.name,
        source,
    })?;

    let path = paths.output_path(entry.file_name);
    std::fs::write(&path, bytes).map_err(|source| PipelineError::WriteOutput {
        path: path.clone(),
        source,
    })?;

    log::info!(
        "wrote {} ({}x{}) to {}",
        entry.name,
        image.width,
        image.height,
        path.display()
    );

    Ok(GeneratedAsset {
        name: entry.name,
        path,
        width: image.width,
        height: image.height,
    })
}
