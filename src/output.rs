//! Header artifact output and file path generation

use image::RgbaImage;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::format::EncodedArray;

/// Default extension for generated headers.
pub const DEFAULT_HEADER_EXTENSION: &str = "h";

/// First line of every generated header.
pub const HEADER_GUARD: &str = "#pragma once";

/// Error type for output operations
#[derive(Debug, Error)]
pub enum WriteError {
    /// IO error while writing an artifact
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        /// Destination that could not be written
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Echoing to the console failed
    #[error("failed to write to console: {0}")]
    Console(#[source] io::Error),
    /// Image encoding error
    #[error("failed to save '{}': {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// A generated header for one source image.
#[derive(Debug, Clone)]
pub struct HeaderArtifact {
    /// Source file name, used in the provenance comment
    pub source_name: String,
    pub width: u32,
    pub height: u32,
    /// Rendered array declaration
    pub array_text: String,
}

impl HeaderArtifact {
    pub fn new(source_name: impl Into<String>, array: &EncodedArray) -> Self {
        Self {
            source_name: source_name.into(),
            width: array.width(),
            height: array.height(),
            array_text: array.to_c_array(),
        }
    }

    /// Full header file contents.
    pub fn render(&self) -> String {
        format!(
            "{}\n\n// Generated from {}\n// Image size: {}x{}\n\n{}\n",
            HEADER_GUARD, self.source_name, self.width, self.height, self.array_text
        )
    }

    /// Console banner naming the asset and its dimensions.
    pub fn banner(&self) -> String {
        format!("=== {} ({}x{}) ===", self.source_name, self.width, self.height)
    }
}

/// Path of the header generated for `source`: same directory, same stem,
/// extension replaced by `extension`.
pub fn header_path(source: &Path, extension: &str) -> PathBuf {
    source.with_extension(extension)
}

/// Write a header artifact to `path`.
pub fn write_header(artifact: &HeaderArtifact, path: &Path) -> Result<(), WriteError> {
    fs::write(path, artifact.render())
        .map_err(|source| WriteError::Io { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), "wrote header");
    Ok(())
}

/// Echo the banner and array text of an artifact to `out`.
pub fn echo_artifact<W: Write + ?Sized>(out: &mut W, artifact: &HeaderArtifact) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", artifact.banner())?;
    writeln!(out, "{}", artifact.array_text)
}

/// Save an RGBA image to a PNG file.
///
/// Creates parent directories if they don't exist.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), WriteError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|source| WriteError::Io { path: parent.to_path_buf(), source })?;
        }
    }

    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| WriteError::Image { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::PackedColorMatrix;
    use crate::identifier::sanitize;
    use image::Rgba;
    use tempfile::TempDir;

    fn sample_artifact() -> HeaderArtifact {
        let pixels = PackedColorMatrix::from_values(2, 1, vec![0xFF0000, 0x00FF00]).unwrap();
        HeaderArtifact::new("logo.png", &EncodedArray::new(sanitize("logo"), pixels))
    }

    #[test]
    fn test_header_path_replaces_extension() {
        assert_eq!(header_path(Path::new("logos/team.png"), "h"), PathBuf::from("logos/team.h"));
        assert_eq!(header_path(Path::new("team.JPEG"), "hpp"), PathBuf::from("team.hpp"));
        assert_eq!(header_path(Path::new("a.b.gif"), "h"), PathBuf::from("a.b.h"));
    }

    #[test]
    fn test_render_layout() {
        let text = sample_artifact().render();
        assert_eq!(
            text,
            "#pragma once\n\n\
             // Generated from logo.png\n\
             // Image size: 2x1\n\n\
             const uint32_t logo[1][2] = {\n    {0xFF0000, 0x00FF00}\n};\n"
        );
    }

    #[test]
    fn test_echo_artifact() {
        let mut out = Vec::new();
        echo_artifact(&mut out, &sample_artifact()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\n=== logo.png (2x1) ===\nconst uint32_t logo[1][2]"));
        assert!(text.ends_with("};\n"));
    }

    #[test]
    fn test_write_header() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("logo.h");
        write_header(&sample_artifact(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), sample_artifact().render());
    }

    #[test]
    fn test_write_header_missing_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("logo.h");
        let err = write_header(&sample_artifact(), &path).unwrap_err();
        assert!(matches!(err, WriteError::Io { .. }));
        assert!(err.to_string().contains("logo.h"));
    }

    #[test]
    fn test_save_png_creates_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("out.png");
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(1, 1, Rgba([255, 0, 0, 255]));

        save_png(&img, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.get_pixel(1, 1), &Rgba([255, 0, 0, 255]));
    }
}
