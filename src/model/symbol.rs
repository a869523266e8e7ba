use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque glyph used by pattern and memory puzzles.
///
/// Symbols are compared byte for byte. They are never case folded or normalized, so
/// emoji and other glyphs behave the same on every platform.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(glyph: impl Into<String>) -> Self {
        Symbol(glyph.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_placeholder(&self) -> bool {
        self.0 == PLACEHOLDER
    }
}

/// Marks the unknown cell of a pattern grid.
pub const PLACEHOLDER: &str = "?";

impl From<&str> for Symbol {
    fn from(glyph: &str) -> Self {
        Symbol::new(glyph)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
