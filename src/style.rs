//! Composite styles.
//!
//! A `Style` is an ordered list of [`Color`]s rendered as one code, e.g.
//! foreground + background + bold as `"31;47;1"`.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::TintError;
use crate::render::Paint;

/// A collection of colors.
///
/// Can include foreground, background and attribute codes. Order is kept
/// as given; two styles with the same sequence behave identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style {
    colors: Cow<'static, [Color]>,
}

impl Style {
    /// Build a style from any sequence of colors.
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        Self {
            colors: Cow::Owned(colors.into_iter().collect()),
        }
    }

    /// Build a style from a static slice, usable in `const` items.
    ///
    /// ```
    /// use tint::{Style, BOLD, FG_GREEN};
    ///
    /// const SUCCESS: Style = Style::from_static(&[FG_GREEN, BOLD]);
    /// assert_eq!(SUCCESS.code(), "32;1");
    /// ```
    pub const fn from_static(colors: &'static [Color]) -> Self {
        Self {
            colors: Cow::Borrowed(colors),
        }
    }

    /// The code string, e.g. `"32;45;3"`. Empty for an empty style.
    pub fn code(&self) -> String {
        colors_to_code(&self.colors)
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Join colors into a code string: `"32;45;3"`.
fn colors_to_code(colors: &[Color]) -> String {
    let mut code = String::with_capacity(colors.len() * 4);
    for (i, color) in colors.iter().enumerate() {
        if i > 0 {
            code.push(';');
        }
        code.push_str(&color.to_string());
    }
    code
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

impl From<Color> for Style {
    fn from(color: Color) -> Self {
        Self::new([color])
    }
}

impl From<Vec<Color>> for Style {
    fn from(colors: Vec<Color>) -> Self {
        Self {
            colors: Cow::Owned(colors),
        }
    }
}

impl FromIterator<Color> for Style {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Parses a code string (`"31;47;1"`). Each part may also be a color name.
/// An empty or blank string yields an empty style.
impl FromStr for Style {
    type Err = TintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        s.split(';').map(str::parse::<Color>).collect()
    }
}

impl Paint for Style {
    fn ansi_code(&self) -> String {
        self.code()
    }
}
