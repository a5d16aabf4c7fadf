//! Encode command implementation

use std::io;
use std::path::Path;
use std::process::ExitCode;

use super::{EXIT_SUCCESS, EXIT_USAGE};
use crate::batch::{encode_path, ConsoleProgress, EncodeOptions};
use crate::config::ImgConfig;

/// Execute the encode command.
///
/// Per-asset failures are reported but do not change the exit code.
pub fn run_encode(path: &Path, config: &ImgConfig) -> ExitCode {
    let options = EncodeOptions::from(config);
    let progress = ConsoleProgress::new();
    let mut stdout = io::stdout();

    match encode_path(path, &options, &mut stdout, &progress) {
        Ok(report) => {
            tracing::debug!(succeeded = report.succeeded(), failed = report.failed(), "encode finished");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_USAGE)
        }
    }
}
