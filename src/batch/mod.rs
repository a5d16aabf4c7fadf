//! Batch encoding of raster assets into C headers.
//!
//! [`encode_path`] accepts either a single image or a directory. Usage
//! problems (missing path, unsupported file, empty directory) are returned as
//! [`UsageError`] before anything is written. Once processing starts, each
//! asset's decode or write failure is captured in the [`BatchReport`] and the
//! remaining assets are still processed.

pub mod progress;
pub mod result;

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::ImgConfig;
use crate::decode::decode_asset;
use crate::error::{AssetError, UsageError};
use crate::format::EncodedArray;
use crate::identifier::{find_collisions, Identifier};
use crate::output::{echo_artifact, header_path, write_header, HeaderArtifact, WriteError};
use crate::scan::{scan_directory, RasterAsset};

pub use progress::{ConsoleProgress, NullProgress, ProgressEvent, ProgressReporter, RecordingProgress};
pub use result::{AssetOutcome, BatchReport};

/// Options for header generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Extension of generated headers, without the dot
    pub header_extension: String,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self { header_extension: crate::output::DEFAULT_HEADER_EXTENSION.to_string() }
    }
}

impl From<&ImgConfig> for EncodeOptions {
    fn from(config: &ImgConfig) -> Self {
        Self { header_extension: config.encode.header_extension.clone() }
    }
}

/// Encode one asset: decode, format, write its header and echo it to `out`.
///
/// Returns the path of the written header.
pub fn encode_asset<W: Write + ?Sized>(
    asset: &RasterAsset,
    options: &EncodeOptions,
    out: &mut W,
) -> Result<PathBuf, AssetError> {
    let decoded = decode_asset(asset)?;
    let array = EncodedArray::new(Identifier::sanitize(&asset.stem), decoded.pixels);
    let artifact = HeaderArtifact::new(asset.file_name(), &array);

    echo_artifact(out, &artifact).map_err(WriteError::Console)?;

    let path = header_path(&asset.path, &options.header_extension);
    write_header(&artifact, &path)?;
    writeln!(out, "Written: {}", path.display()).map_err(WriteError::Console)?;

    Ok(path)
}

/// Encode a single file or every supported image in a directory.
pub fn encode_path<W: Write + ?Sized>(
    path: &Path,
    options: &EncodeOptions,
    out: &mut W,
    progress: &dyn ProgressReporter,
) -> Result<BatchReport, UsageError> {
    if !path.exists() {
        return Err(UsageError::NotFound(path.to_path_buf()));
    }

    if path.is_file() {
        encode_file(path, options, out, progress)
    } else if path.is_dir() {
        encode_directory(path, options, out, progress)
    } else {
        Err(UsageError::NotFileOrDirectory(path.to_path_buf()))
    }
}

/// Encode one explicitly named file.
pub fn encode_file<W: Write + ?Sized>(
    path: &Path,
    options: &EncodeOptions,
    out: &mut W,
    progress: &dyn ProgressReporter,
) -> Result<BatchReport, UsageError> {
    let asset = RasterAsset::from_path(path).ok_or_else(|| UsageError::UnsupportedExtension {
        path: path.to_path_buf(),
        extension: path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default(),
    })?;

    let mut report = BatchReport::new();
    report.push(process(asset, options, out, progress));
    Ok(report)
}

/// Encode every supported image in `dir`, in scan order.
pub fn encode_directory<W: Write + ?Sized>(
    dir: &Path,
    options: &EncodeOptions,
    out: &mut W,
    progress: &dyn ProgressReporter,
) -> Result<BatchReport, UsageError> {
    let assets = scan_directory(dir)?;
    if assets.is_empty() {
        return Err(UsageError::NoAssets(dir.to_path_buf()));
    }

    progress.report(ProgressEvent::BatchStarted { root: dir.to_path_buf(), total: assets.len() });
    report_collisions(&assets, progress);

    let mut report = BatchReport::new();
    for asset in assets {
        report.push(process(asset, options, out, progress));
    }

    progress.report(ProgressEvent::BatchCompleted {
        succeeded: report.succeeded(),
        failed: report.failed(),
    });
    Ok(report)
}

fn process<W: Write + ?Sized>(
    asset: RasterAsset,
    options: &EncodeOptions,
    out: &mut W,
    progress: &dyn ProgressReporter,
) -> AssetOutcome {
    let result = encode_asset(&asset, options, out);
    if let Err(err) = &result {
        tracing::debug!(asset = %asset.path.display(), error = ?err, "asset failed");
        progress.report(ProgressEvent::AssetFailed { name: asset.file_name(), message: err.to_string() });
    }
    AssetOutcome::new(asset, result.map(|path| vec![path]))
}

/// Flag stems in a batch that sanitize to the same identifier.
pub fn report_collisions(assets: &[RasterAsset], progress: &dyn ProgressReporter) {
    for collision in find_collisions(assets.iter().map(|a| a.stem.as_str())) {
        progress.report(ProgressEvent::Warning { message: collision.to_string() });
    }
}
