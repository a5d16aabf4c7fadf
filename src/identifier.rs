//! Symbol names derived from file stems
//!
//! Generated arrays and manifest entries are referenced by identifiers that
//! must be valid C/C++ symbols. [`sanitize`] maps any stem onto that space
//! deterministically. Distinct stems can map to the same identifier; use
//! [`find_collisions`] to report those.

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// Identifier used when a stem sanitizes to nothing.
pub const FALLBACK_IDENTIFIER: &str = "image_data";

/// A valid C symbol name (`[A-Za-z_][A-Za-z0-9_]*`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Derive an identifier from a file stem.
    pub fn sanitize(stem: &str) -> Self {
        let mut ident: String =
            stem.chars().map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' }).collect();

        if ident.is_empty() {
            ident.push_str(FALLBACK_IDENTIFIER);
        } else if ident.starts_with(|c: char| c.is_ascii_digit()) {
            ident.insert(0, '_');
        }

        Identifier(ident)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derive an identifier from a file stem. See [`Identifier::sanitize`].
pub fn sanitize(stem: &str) -> Identifier {
    Identifier::sanitize(stem)
}

/// Check whether `name` is a valid C symbol name.
pub fn is_valid_identifier(name: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid"))
        .is_match(name)
}

/// An identifier produced by more than one distinct stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub identifier: Identifier,
    /// The colliding stems, in input order
    pub stems: Vec<String>,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "identifier '{}' is generated by several files: {}", self.identifier, self.stems.join(", "))
    }
}

/// Find identifiers shared by several stems, ordered by identifier.
///
/// Collisions are only reported; the generated output keeps both entries.
pub fn find_collisions<'a, I>(stems: I) -> Vec<Collision>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut by_ident: BTreeMap<Identifier, Vec<String>> = BTreeMap::new();
    for stem in stems {
        by_ident.entry(sanitize(stem)).or_default().push(stem.to_string());
    }

    by_ident
        .into_iter()
        .filter(|(_, stems)| stems.len() > 1)
        .map(|(identifier, stems)| Collision { identifier, stems })
        .collect()
}
