//! Configuration schema types for `imgarray.toml`
//!
//! Every section and field is optional; omitted values fall back to the
//! defaults below. Unknown fields are rejected at parse time.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::identifier::is_valid_identifier;
use crate::output::DEFAULT_HEADER_EXTENSION;

/// Resource type tag written for every manifest entry.
pub const DEFAULT_FORMAT_TAG: &str = "RGB565";

/// Name of the generated reference array in the manifest.
pub const DEFAULT_ARRAY_NAME: &str = "logos";

/// Target size used by `resize` when none is given.
pub const DEFAULT_RESIZE_SIZE: Size = Size { width: 14, height: 14 };

/// A `WxH` pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl From<[u32; 2]> for Size {
    fn from([width, height]: [u32; 2]) -> Self {
        Self { width, height }
    }
}

impl From<Size> for [u32; 2] {
    fn from(size: Size) -> Self {
        [size.width, size.height]
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl std::str::FromStr for Size {
    type Err = String;

    /// Parse `"WxH"` (e.g. `"14x14"`). Both dimensions must be positive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(|c: char| c == 'x' || c == 'X')
            .ok_or_else(|| format!("invalid size '{}': expected WxH", s))?;
        let width: u32 = w.trim().parse().map_err(|_| format!("invalid width in '{}'", s))?;
        let height: u32 = h.trim().parse().map_err(|_| format!("invalid height in '{}'", s))?;
        if width == 0 || height == 0 {
            return Err(format!("invalid size '{}': dimensions must be positive", s));
        }
        Ok(Self { width, height })
    }
}

/// `[encode]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncodeConfig {
    /// Extension of generated headers, without the dot
    #[serde(default = "default_header_extension")]
    pub header_extension: String,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self { header_extension: default_header_extension() }
    }
}

fn default_header_extension() -> String {
    DEFAULT_HEADER_EXTENSION.to_string()
}

/// `[manifest]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestConfig {
    /// Resource type tag for each entry
    #[serde(default = "default_format_tag")]
    pub format_tag: String,
    /// Name of the reference array
    #[serde(default = "default_array_name")]
    pub array_name: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self { format_tag: default_format_tag(), array_name: default_array_name() }
    }
}

fn default_format_tag() -> String {
    DEFAULT_FORMAT_TAG.to_string()
}

fn default_array_name() -> String {
    DEFAULT_ARRAY_NAME.to_string()
}

/// `[resize]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResizeConfig {
    /// Target sizes as `[width, height]` pairs
    #[serde(default = "default_sizes")]
    pub sizes: Vec<Size>,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self { sizes: default_sizes() }
    }
}

fn default_sizes() -> Vec<Size> {
    vec![DEFAULT_RESIZE_SIZE]
}

/// Root of `imgarray.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImgConfig {
    #[serde(default)]
    pub encode: EncodeConfig,
    #[serde(default)]
    pub manifest: ManifestConfig,
    #[serde(default)]
    pub resize: ResizeConfig,
}

/// A single field-level validation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Dotted path of the offending field
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ImgConfig {
    /// Check field values, returning every problem found.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();
        let mut push = |field: &str, message: &str| {
            errors.push(ConfigValidationError { field: field.to_string(), message: message.to_string() })
        };

        let ext = &self.encode.header_extension;
        if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            push("encode.header_extension", "must be a non-empty alphanumeric extension without a dot");
        }

        let tag = &self.manifest.format_tag;
        if tag.is_empty() || tag.chars().any(char::is_whitespace) {
            push("manifest.format_tag", "must be a non-empty tag without whitespace");
        }

        if !is_valid_identifier(&self.manifest.array_name) {
            push("manifest.array_name", "must be a valid C identifier");
        }

        if self.resize.sizes.is_empty() {
            push("resize.sizes", "must contain at least one [width, height] pair");
        }
        for (i, size) in self.resize.sizes.iter().enumerate() {
            if size.width == 0 || size.height == 0 {
                push(&format!("resize.sizes[{}]", i), "dimensions must be positive");
            }
        }

        errors
    }
}
