//! Resize command implementation

use std::path::Path;
use std::process::ExitCode;

use super::{EXIT_SUCCESS, EXIT_USAGE};
use crate::batch::ConsoleProgress;
use crate::config::{ImgConfig, Size};
use crate::resize::resize_directory;

/// Execute the resize command. Sizes given on the command line replace the
/// configured ones.
pub fn run_resize(dir: &Path, out: &Path, sizes: &[Size], config: &ImgConfig) -> ExitCode {
    let sizes = if sizes.is_empty() { config.resize.sizes.as_slice() } else { sizes };

    match resize_directory(dir, out, sizes, &ConsoleProgress::new()) {
        Ok(report) => {
            println!(
                "Resized {} image(s) into '{}' ({} file(s) written)",
                report.succeeded(),
                out.display(),
                report.written().len()
            );
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_USAGE)
        }
    }
}
