//! Shortcut functions for common foreground colors.
//!
//! `red(args)` is the same as `FG_RED.sprint(args)`. The table behind the
//! shortcuts is also exposed as [`NAMED_COLORS`] for name-based lookup.

use super::palette::*;
use super::Color;
use crate::render::{Operand, Paint};

macro_rules! named_colors {
    ($($(#[$doc:meta])* $func:ident => $name:literal, $color:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $func(args: &[&dyn Operand]) -> String {
                $color.sprint(args)
            }
        )*

        /// Color names paired with the foreground constant their shortcut uses.
        pub static NAMED_COLORS: &[(&str, Color)] = &[$(($name, $color)),*];
    };
}

named_colors! {
    /// Shortcut for `FG_RED.sprint`.
    red => "red", FG_RED;
    /// Shortcut for `FG_CYAN.sprint`.
    cyan => "cyan", FG_CYAN;
    /// Shortcut for `FG_GRAY.sprint`.
    gray => "gray", FG_GRAY;
    /// Shortcut for `FG_BLUE.sprint`.
    blue => "blue", FG_BLUE;
    /// Shortcut for `FG_BLACK.sprint`.
    black => "black", FG_BLACK;
    /// Shortcut for `FG_GREEN.sprint`.
    green => "green", FG_GREEN;
    /// Shortcut for `FG_WHITE.sprint`.
    white => "white", FG_WHITE;
    /// Shortcut for `FG_YELLOW.sprint`.
    yellow => "yellow", FG_YELLOW;
    /// Shortcut for `FG_MAGENTA.sprint`.
    magenta => "magenta", FG_MAGENTA;
    /// Shortcut for `FG_DEFAULT.sprint`.
    normal => "normal", FG_DEFAULT;

    /// Shortcut for `FG_LIGHT_RED.sprint`.
    light_red => "light_red", FG_LIGHT_RED;
    /// Shortcut for `FG_LIGHT_CYAN.sprint`.
    light_cyan => "light_cyan", FG_LIGHT_CYAN;
    /// Shortcut for `FG_LIGHT_BLUE.sprint`.
    light_blue => "light_blue", FG_LIGHT_BLUE;
    /// Shortcut for `FG_LIGHT_GREEN.sprint`.
    light_green => "light_green", FG_LIGHT_GREEN;
    /// Shortcut for `FG_LIGHT_WHITE.sprint`.
    light_white => "light_white", FG_LIGHT_WHITE;
    /// Shortcut for `FG_LIGHT_YELLOW.sprint`.
    light_yellow => "light_yellow", FG_LIGHT_YELLOW;
    /// Shortcut for `FG_LIGHT_MAGENTA.sprint`.
    light_magenta => "light_magenta", FG_LIGHT_MAGENTA;
}

/// Find a named foreground color.
///
/// Case, underscores, dashes and spaces are ignored, so `"LightCyan"`,
/// `"light-cyan"` and `"light_cyan"` all match.
pub fn lookup(name: &str) -> Option<Color> {
    let wanted = normalize(name);
    if wanted.is_empty() {
        return None;
    }
    NAMED_COLORS
        .iter()
        .find(|(key, _)| normalize(key) == wanted)
        .map(|(_, color)| *color)
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
