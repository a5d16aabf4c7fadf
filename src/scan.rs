//! Raster asset discovery
//!
//! Lists the image files in a directory (non-recursively) whose extension is
//! one of the supported raster formats, ordered by file name.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Raster file extensions accepted by the scanner, lowercase and sorted.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["bmp", "gif", "jpeg", "jpg", "png", "webp"];

/// Error during directory scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scanned path exists but is not a directory (or does not exist)
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    /// IO error while listing the directory
    #[error("failed to list '{}': {source}", path.display())]
    Io {
        /// Directory being listed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// Raster formats recognised by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterFormat {
    Png,
    Jpeg,
    Bmp,
    Gif,
    WebP,
}

impl RasterFormat {
    /// Recognise a format from a file extension, ignoring case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(RasterFormat::Png),
            "jpg" | "jpeg" => Some(RasterFormat::Jpeg),
            "bmp" => Some(RasterFormat::Bmp),
            "gif" => Some(RasterFormat::Gif),
            "webp" => Some(RasterFormat::WebP),
            _ => None,
        }
    }

    /// Recognise a format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension().and_then(OsStr::to_str).and_then(Self::from_extension)
    }

    /// The matching `image` crate format, used when content sniffing fails.
    pub fn image_format(self) -> image::ImageFormat {
        match self {
            RasterFormat::Png => image::ImageFormat::Png,
            RasterFormat::Jpeg => image::ImageFormat::Jpeg,
            RasterFormat::Bmp => image::ImageFormat::Bmp,
            RasterFormat::Gif => image::ImageFormat::Gif,
            RasterFormat::WebP => image::ImageFormat::WebP,
        }
    }
}

/// A candidate image file found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterAsset {
    /// Path to the file
    pub path: PathBuf,
    /// File stem, lossily converted to UTF-8
    pub stem: String,
    /// Format implied by the extension
    pub format: RasterFormat,
}

impl RasterAsset {
    /// Build an asset from a path, or `None` if the extension is unsupported.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let format = RasterFormat::from_path(&path)?;
        let stem = path.file_stem().unwrap_or_default().to_string_lossy().into_owned();
        Some(Self { path, stem, format })
    }

    /// File name (with extension) for messages and provenance comments.
    pub fn file_name(&self) -> String {
        self.path.file_name().unwrap_or_default().to_string_lossy().into_owned()
    }
}

/// Check if a path has a supported raster extension.
pub fn is_supported_image(path: &Path) -> bool {
    RasterFormat::from_path(path).is_some()
}

/// Supported extensions rendered for user-facing messages (`.bmp, .gif, ...`).
pub fn supported_extensions_list() -> String {
    SUPPORTED_EXTENSIONS.iter().map(|e| format!(".{}", e)).collect::<Vec<_>>().join(", ")
}

/// List the supported image files directly inside `dir`, sorted by file name.
pub fn scan_directory(dir: &Path) -> Result<Vec<RasterAsset>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let io_err = |source| ScanError::Io { path: dir.to_path_buf(), source };
    let mut assets = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(asset) = RasterAsset::from_path(path) {
            assets.push(asset);
        }
    }

    assets.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    tracing::debug!(dir = %dir.display(), count = assets.len(), "scanned directory");
    Ok(assets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_supported_image_case_insensitive() {
        assert!(is_supported_image(Path::new("logo.png")));
        assert!(is_supported_image(Path::new("logo.PNG")));
        assert!(is_supported_image(Path::new("path/to/logo.JpEg")));
        assert!(is_supported_image(Path::new("anim.gif")));
        assert!(is_supported_image(Path::new("photo.webp")));
        assert!(is_supported_image(Path::new("icon.bmp")));
    }

    #[test]
    fn test_is_supported_image_invalid() {
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("logo.h")));
        assert!(!is_supported_image(Path::new("png")));
        assert!(!is_supported_image(Path::new(".png")));
        assert!(!is_supported_image(Path::new("logo")));
    }

    #[test]
    fn test_supported_extensions_list() {
        assert_eq!(supported_extensions_list(), ".bmp, .gif, .jpeg, .jpg, .png, .webp");
    }

    #[test]
    fn test_scan_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        fs::write(dir.join("zeta.png"), b"x").unwrap();
        fs::write(dir.join("alpha.JPG"), b"x").unwrap();
        fs::write(dir.join("middle.gif"), b"x").unwrap();
        fs::write(dir.join("readme.txt"), b"x").unwrap();
        fs::create_dir(dir.join("nested.png")).unwrap();
        fs::create_dir(dir.join("sub")).unwrap();
        fs::write(dir.join("sub").join("deep.png"), b"x").unwrap();

        let assets = scan_directory(dir).unwrap();
        let names: Vec<String> = assets.iter().map(RasterAsset::file_name).collect();
        assert_eq!(names, vec!["alpha.JPG", "middle.gif", "zeta.png"]);
        assert_eq!(assets[0].format, RasterFormat::Jpeg);
        assert_eq!(assets[0].stem, "alpha");
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp = TempDir::new().unwrap();
        assert!(scan_directory(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_scan_not_a_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("logo.png");
        fs::write(&file, b"x").unwrap();

        assert!(matches!(scan_directory(&file), Err(ScanError::NotADirectory(_))));
        assert!(matches!(
            scan_directory(&temp.path().join("missing")),
            Err(ScanError::NotADirectory(_))
        ));
    }
}
