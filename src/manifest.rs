//! Image resource manifest generation
//!
//! Produces the `image:` resource list consumed by the firmware build
//! configuration, plus a C++ array referencing every generated image by
//! identifier. Only file names are inspected; images are never decoded.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ImgConfig, DEFAULT_ARRAY_NAME, DEFAULT_FORMAT_TAG};
use crate::identifier::{find_collisions, Identifier};
use crate::scan::{scan_directory, ScanError};

/// One `image:` resource entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Absolute path to the source image
    pub path: PathBuf,
    pub identifier: Identifier,
    /// Resource type tag (e.g. `RGB565`)
    pub format_tag: String,
}

/// Options for manifest rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestOptions {
    /// Keep only the first `limit` images
    pub limit: Option<usize>,
    pub format_tag: String,
    /// Name of the reference array
    pub array_name: String,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self { limit: None, format_tag: DEFAULT_FORMAT_TAG.to_string(), array_name: DEFAULT_ARRAY_NAME.to_string() }
    }
}

impl ManifestOptions {
    /// Options from config, with an optional entry limit.
    pub fn from_config(config: &ImgConfig, limit: Option<usize>) -> Self {
        Self {
            limit,
            format_tag: config.manifest.format_tag.clone(),
            array_name: config.manifest.array_name.clone(),
        }
    }
}

/// A rendered-on-demand manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
    pub array_name: String,
}

impl Manifest {
    /// The `image:` resource list.
    pub fn resources(&self) -> String {
        let mut out = String::from("image:\n");
        for entry in &self.entries {
            out.push_str(&format!("  - file: \"{}\"\n", escape_quoted(&entry.path.to_string_lossy())));
            out.push_str(&format!("    id: {}\n", entry.identifier));
            out.push_str(&format!("    type: {}\n", entry.format_tag));
        }
        out
    }

    /// The C++ array of image references, without a trailing comma.
    pub fn references(&self) -> String {
        let mut out = format!("// C++ {}[] array snippet:\nconst Image* {}[] = {{\n", self.array_name, self.array_name);
        let refs: Vec<String> = self.entries.iter().map(|e| format!("  id({})", e.identifier)).collect();
        if !refs.is_empty() {
            out.push_str(&refs.join(",\n"));
            out.push('\n');
        }
        out.push_str("};\n");
        out
    }

    /// Identifiers generated by more than one image.
    pub fn collisions(&self) -> Vec<crate::identifier::Collision> {
        let stems: Vec<String> = self
            .entries
            .iter()
            .map(|e| e.path.file_stem().unwrap_or_default().to_string_lossy().into_owned())
            .collect();
        find_collisions(stems.iter().map(String::as_str))
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.resources(), self.references())
    }
}

/// Scan `dir` and build the manifest for its images.
pub fn generate_manifest(dir: &Path, options: &ManifestOptions) -> Result<Manifest, ScanError> {
    let mut assets = scan_directory(dir)?;
    if let Some(limit) = options.limit {
        assets.truncate(limit);
    }

    let entries = assets
        .into_iter()
        .map(|asset| {
            let path = fs::canonicalize(&asset.path)
                .map_err(|source| ScanError::Io { path: asset.path.clone(), source })?;
            Ok(ManifestEntry {
                path,
                identifier: Identifier::sanitize(&asset.stem),
                format_tag: options.format_tag.clone(),
            })
        })
        .collect::<Result<Vec<_>, ScanError>>()?;

    Ok(Manifest { entries, array_name: options.array_name.clone() })
}

/// Escape backslashes and double quotes for a double-quoted YAML scalar.
fn escape_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
