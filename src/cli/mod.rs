//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod encode;
mod manifest;
mod resize;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{load_config, ImgConfig, Size};
use crate::error::UsageError;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_USAGE: u8 = 1;

/// imgarray - Convert raster logos into C arrays and image manifests
#[derive(Parser)]
#[command(name = "imgarray")]
#[command(about = "imgarray - Convert raster logos into packed RGB C arrays and image manifests")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: nearest imgarray.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an image, or every image in a directory, into C headers
    Encode {
        /// Image file or directory of images (non-recursive)
        path: PathBuf,
    },
    /// Print image resource entries and a reference array for a directory
    Manifest {
        /// Directory containing images
        dir: PathBuf,

        /// Only include the first N images (sorted by file name)
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
        limit: Option<u64>,
    },
    /// Resize every image in a directory to fixed sizes, saved as PNG
    Resize {
        /// Directory containing source images
        dir: PathBuf,

        /// Output directory
        #[arg(short, long)]
        out: PathBuf,

        /// Target size, repeatable (default from config, else 14x14)
        #[arg(long = "size", value_name = "WxH")]
        sizes: Vec<Size>,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and are not failures
            let code = if e.use_stderr() { EXIT_USAGE } else { EXIT_SUCCESS };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    init_logging(cli.verbose);

    let config = match load_cli_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    match cli.command {
        Commands::Encode { path } => encode::run_encode(&path, &config),
        Commands::Manifest { dir, limit } => {
            manifest::run_manifest(&dir, limit.map(|n| n as usize), &config)
        }
        Commands::Resize { dir, out, sizes } => resize::run_resize(&dir, &out, &sizes, &config),
    }
}

/// Load `--config` or the discovered config file. Failures are usage errors.
fn load_cli_config(path: Option<&Path>) -> Result<ImgConfig, UsageError> {
    Ok(load_config(path)?)
}

/// Install the stderr log subscriber.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "imgarray=debug" } else { "imgarray=warn" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .try_init();
}
