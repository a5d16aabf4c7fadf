//! CLI integration tests for the `imgarray encode` command.
//!
//! Runs the binary against generated fixture images in temporary directories
//! and checks exit codes, console output and the headers written to disk.

use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run imgarray with the given arguments from `cwd`.
fn run(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_imgarray"))
        .current_dir(cwd)
        .args(args)
        .output()
        .expect("Failed to execute imgarray")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn write_solid(path: &Path, width: u32, height: u32, color: [u8; 3]) {
    RgbImage::from_pixel(width, height, Rgb(color)).save(path).unwrap();
}

/// Header files (`*.h`) in a directory, sorted.
fn headers(dir: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|e| e == "h"))
        .collect();
    found.sort();
    found
}

// ============================================================================
// Single file mode
// ============================================================================

#[test]
fn test_encode_two_by_one_png() {
    let temp = TempDir::new().unwrap();
    let mut img = RgbImage::new(2, 1);
    img.put_pixel(0, 0, Rgb([255, 0, 0]));
    img.put_pixel(1, 0, Rgb([0, 255, 0]));
    img.save(temp.path().join("pair.png")).unwrap();

    let output = run(temp.path(), &["encode", "pair.png"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("=== pair.png (2x1) ==="));
    assert!(out.contains("const uint32_t pair[1][2] = {"));
    assert!(out.contains("{0xFF0000, 0x00FF00}"));
    assert!(out.contains("Written: pair.h"));

    let header = fs::read_to_string(temp.path().join("pair.h")).unwrap();
    assert_eq!(
        header,
        "#pragma once\n\n// Generated from pair.png\n// Image size: 2x1\n\n\
         const uint32_t pair[1][2] = {\n    {0xFF0000, 0x00FF00}\n};\n"
    );
}

#[test]
fn test_encode_sanitizes_identifier() {
    let temp = TempDir::new().unwrap();
    write_solid(&temp.path().join("7-logo.bmp"), 3, 2, [0, 0, 255]);

    let output = run(temp.path(), &["encode", "7-logo.bmp"]);
    assert!(output.status.success());

    let header = fs::read_to_string(temp.path().join("7-logo.h")).unwrap();
    assert!(header.contains("const uint32_t _7_logo[2][3] = {"));
    assert_eq!(header.matches("0x0000FF").count(), 6);
}

#[test]
fn test_encode_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notes.txt"), "hello").unwrap();

    let output = run(temp.path(), &["encode", "notes.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unsupported file extension '.txt'"));
    assert!(headers(temp.path()).is_empty());
}

#[test]
fn test_encode_missing_path() {
    let temp = TempDir::new().unwrap();
    let output = run(temp.path(), &["encode", "missing.png"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("'missing.png' not found"));
}

#[test]
fn test_encode_missing_argument() {
    let temp = TempDir::new().unwrap();
    let output = run(temp.path(), &["encode"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_help_exits_zero() {
    let temp = TempDir::new().unwrap();
    let output = run(temp.path(), &["--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("encode"));
}

// ============================================================================
// Directory mode
// ============================================================================

#[test]
fn test_encode_empty_directory() {
    let temp = TempDir::new().unwrap();
    let logos = temp.path().join("logos");
    fs::create_dir(&logos).unwrap();

    let output = run(temp.path(), &["encode", "logos"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No image files found"));
    assert_eq!(fs::read_dir(&logos).unwrap().count(), 0);
}

#[test]
fn test_encode_directory_skips_unsupported() {
    let temp = TempDir::new().unwrap();
    write_solid(&temp.path().join("a.png"), 2, 2, [1, 2, 3]);
    write_solid(&temp.path().join("b.bmp"), 1, 1, [4, 5, 6]);
    write_solid(&temp.path().join("c.jpg"), 1, 2, [255, 255, 255]);
    fs::write(temp.path().join("d.txt"), "not an image").unwrap();

    let output = run(temp.path(), &["encode", "."]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Found 3 image(s)"));
    assert!(out.trim_end().ends_with("Done."));
    assert_eq!(
        headers(temp.path()),
        vec![temp.path().join("a.h"), temp.path().join("b.h"), temp.path().join("c.h")]
    );
    assert!(!temp.path().join("d.h").exists());

    let order: Vec<usize> = ["=== a.png", "=== b.bmp", "=== c.jpg"]
        .iter()
        .map(|banner| out.find(banner).expect("banner printed"))
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]), "assets processed in name order");
}

#[test]
fn test_encode_directory_with_corrupt_file() {
    let temp = TempDir::new().unwrap();
    write_solid(&temp.path().join("first.png"), 1, 1, [10, 20, 30]);
    fs::write(temp.path().join("middle.png"), b"\x89PNG but not really").unwrap();
    write_solid(&temp.path().join("last.png"), 1, 1, [40, 50, 60]);

    let output = run(temp.path(), &["encode", "."]);
    assert_eq!(output.status.code(), Some(0));

    let errors = stderr(&output);
    assert_eq!(errors.matches("Error processing").count(), 1);
    assert!(errors.contains("Error processing middle.png"));

    assert_eq!(headers(temp.path()), vec![temp.path().join("first.h"), temp.path().join("last.h")]);
    let last = fs::read_to_string(temp.path().join("last.h")).unwrap();
    assert!(last.contains("{0x28323C}"));
}

#[test]
fn test_encode_uses_config_extension() {
    let temp = TempDir::new().unwrap();
    write_solid(&temp.path().join("logo.png"), 1, 1, [0, 0, 0]);
    fs::write(temp.path().join("imgarray.toml"), "[encode]\nheader_extension = \"hpp\"\n").unwrap();

    let output = run(temp.path(), &["encode", "logo.png"]);
    assert!(output.status.success());
    assert!(temp.path().join("logo.hpp").exists());
    assert!(!temp.path().join("logo.h").exists());
}

#[test]
fn test_encode_invalid_config() {
    let temp = TempDir::new().unwrap();
    write_solid(&temp.path().join("logo.png"), 1, 1, [0, 0, 0]);
    fs::write(temp.path().join("bad.toml"), "[encode]\nheader_extension = \"\"\n").unwrap();

    let output = run(temp.path(), &["--config", "bad.toml", "encode", "logo.png"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("encode.header_extension"));
    assert!(headers(temp.path()).is_empty());
}
