//! Manifest command implementation

use std::path::Path;
use std::process::ExitCode;

use super::{EXIT_SUCCESS, EXIT_USAGE};
use crate::config::ImgConfig;
use crate::manifest::{generate_manifest, ManifestOptions};

/// Execute the manifest command
pub fn run_manifest(dir: &Path, limit: Option<usize>, config: &ImgConfig) -> ExitCode {
    let options = ManifestOptions::from_config(config, limit);

    let manifest = match generate_manifest(dir, &options) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    if manifest.entries.is_empty() {
        eprintln!("Warning: no image files found in '{}'", dir.display());
    }
    for collision in manifest.collisions() {
        eprintln!("Warning: {}", collision);
    }

    print!("{}", manifest);
    ExitCode::from(EXIT_SUCCESS)
}
