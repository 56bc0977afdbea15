//! The `Color` type and its constant tables.
//!
//! A `Color` is a single SGR code. Despite the name it also covers the
//! text attributes (bold, italic, ...) since those share the same code space.

pub mod aliases;
pub mod palette;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TintError;
use crate::render::Paint;

/// A number which will be used to color strings in the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(u8);

impl Color {
    /// Create a color from a raw SGR code.
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// The raw SGR code.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Text attribute (0-9) rather than a color.
    pub fn is_attribute(self) -> bool {
        self.0 <= 9
    }

    /// Foreground slot, including the default (39) and bright variants.
    pub fn is_foreground(self) -> bool {
        matches!(self.0, 30..=37 | 39 | 90..=97)
    }

    /// Background slot, including the default (49) and bright variants.
    pub fn is_background(self) -> bool {
        matches!(self.0, 40..=47 | 49 | 100..=107)
    }

    /// Bright (non-standard) foreground or background, 90-97 or 100-107.
    pub fn is_bright(self) -> bool {
        matches!(self.0, 90..=97 | 100..=107)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for Color {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// Parses a decimal code (`"31"`) or a foreground color name (`"red"`).
impl FromStr for Color {
    type Err = TintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return Ok(Self(code));
        }
        aliases::lookup(trimmed).ok_or_else(|| TintError::InvalidCode {
            value: s.to_string(),
        })
    }
}

impl Paint for Color {
    fn ansi_code(&self) -> String {
        self.to_string()
    }
}
