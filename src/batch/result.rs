//! Batch result types.
//!
//! Every processed asset yields an [`AssetOutcome`] holding either the files
//! it produced or the error that stopped it.

use std::path::PathBuf;

use crate::error::AssetError;
use crate::scan::RasterAsset;

/// Result of processing a single asset.
#[derive(Debug)]
pub struct AssetOutcome {
    pub asset: RasterAsset,
    /// Files written for this asset, or the failure
    pub result: Result<Vec<PathBuf>, AssetError>,
}

impl AssetOutcome {
    pub fn new(asset: RasterAsset, result: Result<Vec<PathBuf>, AssetError>) -> Self {
        Self { asset, result }
    }

    /// Check if this asset was processed successfully.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&AssetError> {
        self.result.as_ref().err()
    }
}

/// Outcomes of a batch run, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<AssetOutcome>,
}

impl BatchReport {
    /// Create a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: AssetOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of assets processed successfully.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of assets that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.error().is_some()).count()
    }

    /// Every file written by the batch, in order.
    pub fn written(&self) -> Vec<&PathBuf> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok()).flatten().collect()
    }
}
