//! Logo resizing
//!
//! Resamples every image in a directory to one or more fixed sizes and saves
//! the results as PNG, ready to be encoded. Output files are named
//! `{stem}_{W}x{H}.png`.

use image::imageops::FilterType;
use image::DynamicImage;
use std::path::{Path, PathBuf};

use crate::batch::{report_collisions, AssetOutcome, BatchReport, ProgressEvent, ProgressReporter};
use crate::config::Size;
use crate::decode::decode_first_frame;
use crate::error::{AssetError, UsageError};
use crate::output::save_png;
use crate::scan::{scan_directory, RasterAsset};

/// Output path for one asset at one target size.
pub fn resized_path(out_dir: &Path, stem: &str, size: Size) -> PathBuf {
    out_dir.join(format!("{}_{}.png", stem, size))
}

/// Resample an image to exactly `size` with a Lanczos3 filter.
pub fn resize_image(image: &DynamicImage, size: Size) -> DynamicImage {
    image.resize_exact(size.width, size.height, FilterType::Lanczos3)
}

/// Resize one asset to every size in `sizes`, returning the written paths.
pub fn resize_asset(asset: &RasterAsset, out_dir: &Path, sizes: &[Size]) -> Result<Vec<PathBuf>, AssetError> {
    let image = decode_first_frame(asset)?;

    let mut written = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let path = resized_path(out_dir, &asset.stem, size);
        save_png(&resize_image(&image, size).to_rgba8(), &path)?;
        tracing::debug!(asset = %asset.path.display(), output = %path.display(), "resized");
        written.push(path);
    }
    Ok(written)
}

/// Resize every supported image in `src_dir` into `out_dir`.
pub fn resize_directory(
    src_dir: &Path,
    out_dir: &Path,
    sizes: &[Size],
    progress: &dyn ProgressReporter,
) -> Result<BatchReport, UsageError> {
    if sizes.is_empty() {
        return Err(UsageError::InvalidArgument("at least one target size is required".to_string()));
    }

    let assets = scan_directory(src_dir)?;
    if assets.is_empty() {
        return Err(UsageError::NoAssets(src_dir.to_path_buf()));
    }

    progress.report(ProgressEvent::BatchStarted { root: src_dir.to_path_buf(), total: assets.len() });
    report_collisions(&assets, progress);

    let mut report = BatchReport::new();
    for asset in assets {
        let result = resize_asset(&asset, out_dir, sizes);
        if let Err(err) = &result {
            progress.report(ProgressEvent::AssetFailed { name: asset.file_name(), message: err.to_string() });
        }
        report.push(AssetOutcome::new(asset, result));
    }

    progress.report(ProgressEvent::BatchCompleted {
        succeeded: report.succeeded(),
        failed: report.failed(),
    });
    Ok(report)
}
