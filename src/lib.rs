//! imgarray - Library for turning raster logos into embedded display data
//!
//! This library provides functionality to:
//! - Scan a directory for supported raster images
//! - Decode images into row-major packed 24-bit RGB matrices
//! - Render them as `const uint32_t` C arrays and write header files
//! - Generate image resource manifests referencing each image by identifier
//! - Resize logos to fixed target sizes

pub mod batch;
pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod format;
pub mod identifier;
pub mod manifest;
pub mod output;
pub mod resize;
pub mod scan;
