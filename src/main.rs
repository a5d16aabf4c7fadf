//! imgarray - Command-line tool for converting logos into firmware image data

use std::process::ExitCode;

use imgarray::cli;

fn main() -> ExitCode {
    cli::run()
}
