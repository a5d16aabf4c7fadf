//! Error types shared by the batch pipelines
//!
//! [`UsageError`] aborts a run before any asset is touched. [`AssetError`]
//! is local to one asset and is collected into the batch report instead of
//! being propagated.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::decode::DecodeError;
use crate::output::WriteError;
use crate::scan::{supported_extensions_list, ScanError};

/// Fatal invocation error.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("'{}' not found", .0.display())]
    NotFound(PathBuf),
    #[error("Unsupported file extension '{extension}'. Supported: {}", supported_extensions_list())]
    UnsupportedExtension {
        path: PathBuf,
        /// Extension including the leading dot, empty if there is none
        extension: String,
    },
    #[error(
        "No image files found in '{}'. Supported extensions: {}",
        .0.display(),
        supported_extensions_list()
    )]
    NoAssets(PathBuf),
    #[error("'{}' is neither a file nor a directory", .0.display())]
    NotFileOrDirectory(PathBuf),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    InvalidArgument(String),
}

/// Failure to process a single asset.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Write(#[from] WriteError),
}
