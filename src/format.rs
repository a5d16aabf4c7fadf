//! C array literal rendering for packed color matrices

use std::fmt::Write;

use crate::decode::PackedColorMatrix;
use crate::identifier::Identifier;

/// Indentation applied to each row of the literal.
const ROW_INDENT: &str = "    ";

/// An encoded image ready for formatting.
#[derive(Debug, Clone)]
pub struct EncodedArray {
    pub identifier: Identifier,
    pub pixels: PackedColorMatrix,
}

impl EncodedArray {
    pub fn new(identifier: Identifier, pixels: PackedColorMatrix) -> Self {
        Self { identifier, pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Render as a `const uint32_t` declaration. See [`format_array`].
    pub fn to_c_array(&self) -> String {
        format_array(&self.identifier, &self.pixels)
    }
}

/// Render a packed matrix as a two-dimensional `const uint32_t` array.
///
/// ```text
/// const uint32_t logo[1][2] = {
///     {0xFF0000, 0x00FF00}
/// };
/// ```
pub fn format_array(identifier: &Identifier, pixels: &PackedColorMatrix) -> String {
    let height = pixels.height() as usize;
    // "0xRRGGBB, " is ten characters per element
    let mut out = String::with_capacity(64 + pixels.values().len() * 10 + height * 8);

    let _ = writeln!(out, "const uint32_t {}[{}][{}] = {{", identifier, pixels.height(), pixels.width());
    for (index, row) in pixels.rows().enumerate() {
        out.push_str(ROW_INDENT);
        out.push('{');
        for (col, value) in row.iter().enumerate() {
            if col > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "0x{:06X}", value);
        }
        out.push('}');
        if index + 1 < height {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("};");
    out
}
