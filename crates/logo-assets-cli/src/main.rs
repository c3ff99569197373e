//! logo-assets: generates app icons and splash screens from the logo.
//!
//! Reads `assets/images/logo/appicons/playstore.png` under the project root
//! (current directory, or `LOGO_ASSETS_ROOT`) and writes the generated PNGs
//! to `assets/images/logo/generated/`.
//!
//! Run with:
//!   cargo run -p logo-assets-cli

use std::path::PathBuf;
use std::process::ExitCode;

use logo_assets_core::config::ROOT_ENV_VAR;
use logo_assets_core::{
    generate_assets, AssetPaths, PipelineError, ProgressEvent, DEFAULT_MANIFEST,
};

const RULE: &str = "==================================================";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let root = match project_root() {
        Ok(root) => root,
        Err(e) => {
            eprintln!("❌ Error: cannot determine project root: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("project root: {}", root.display());

    let paths = AssetPaths::from_project_root(&root);

    println!("🚀 Logo Asset Generator");
    println!("{RULE}");

    let result = generate_assets(&paths, DEFAULT_MANIFEST, |event| match event {
        ProgressEvent::GroupStarted(group) => println!("\nGenerating {}...", group.title()),
        ProgressEvent::AssetWritten(asset) => {
            println!("  ✓ {}: {}", asset.name, asset.path.display())
        }
    });

    match result {
        Ok(assets) => {
            println!("\n{RULE}");
            println!("✅ All {} assets generated successfully!", assets.len());
            println!("\n📁 Output location: {}", paths.output_dir.display());
            println!("\n📝 Next steps:");
            println!("  1. Update pubspec.yaml to use new generated images");
            println!("  2. Run: dart run flutter_launcher_icons");
            println!("  3. Run: dart run flutter_native_splash:create");
            ExitCode::SUCCESS
        }
        Err(e @ PipelineError::MissingSource { .. }) => {
            eprintln!("❌ Error: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{e:?}");
            eprintln!("\n❌ Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// `LOGO_ASSETS_ROOT` if set, otherwise the current directory.
fn project_root() -> std::io::Result<PathBuf> {
    match std::env::var_os(ROOT_ENV_VAR) {
        Some(root) if !root.is_empty() => Ok(PathBuf::from(root)),
        _ => std::env::current_dir(),
    }
}
