//! SGR code constants.
//!
//! Foreground 30-39, bright foreground 90-97, background 40-49,
//! bright background 100-107 and text attributes 0-9.

use super::Color;

// Foreground colors. Basic foreground colors 30 - 37.
pub const FG_BLACK: Color = Color::new(30);
pub const FG_RED: Color = Color::new(31);
pub const FG_GREEN: Color = Color::new(32);
pub const FG_YELLOW: Color = Color::new(33);
pub const FG_BLUE: Color = Color::new(34);
pub const FG_MAGENTA: Color = Color::new(35);
pub const FG_CYAN: Color = Color::new(36);
pub const FG_WHITE: Color = Color::new(37);
/// Reverts to the terminal's default foreground.
pub const FG_DEFAULT: Color = Color::new(39);

// Bright foreground colors 90 - 97 (non-standard).
pub const FG_DARK_GRAY: Color = Color::new(90);
pub const FG_LIGHT_RED: Color = Color::new(91);
pub const FG_LIGHT_GREEN: Color = Color::new(92);
pub const FG_LIGHT_YELLOW: Color = Color::new(93);
pub const FG_LIGHT_BLUE: Color = Color::new(94);
pub const FG_LIGHT_MAGENTA: Color = Color::new(95);
pub const FG_LIGHT_CYAN: Color = Color::new(96);
pub const FG_LIGHT_WHITE: Color = Color::new(97);
/// Alias of [`FG_DARK_GRAY`].
pub const FG_GRAY: Color = FG_DARK_GRAY;

// Background colors. Basic background colors 40 - 47.
pub const BG_BLACK: Color = Color::new(40);
pub const BG_RED: Color = Color::new(41);
pub const BG_GREEN: Color = Color::new(42);
pub const BG_YELLOW: Color = Color::new(43);
pub const BG_BLUE: Color = Color::new(44);
pub const BG_MAGENTA: Color = Color::new(45);
pub const BG_CYAN: Color = Color::new(46);
pub const BG_WHITE: Color = Color::new(47);
/// Reverts to the terminal's default background.
pub const BG_DEFAULT: Color = Color::new(49);

// Bright background colors 100 - 107 (non-standard).
pub const BG_DARK_GRAY: Color = Color::new(100);
pub const BG_LIGHT_RED: Color = Color::new(101);
pub const BG_LIGHT_GREEN: Color = Color::new(102);
pub const BG_LIGHT_YELLOW: Color = Color::new(103);
pub const BG_LIGHT_BLUE: Color = Color::new(104);
pub const BG_LIGHT_MAGENTA: Color = Color::new(105);
pub const BG_LIGHT_CYAN: Color = Color::new(106);
pub const BG_LIGHT_WHITE: Color = Color::new(107);
/// Alias of [`BG_DARK_GRAY`].
pub const BG_GRAY: Color = BG_DARK_GRAY;

// Text attributes 0 - 9.
pub const RESET: Color = Color::new(0);
pub const BOLD: Color = Color::new(1);
/// Faint / dim intensity.
pub const FUZZY: Color = Color::new(2);
pub const ITALIC: Color = Color::new(3);
/// Underline.
pub const UNDERSCORE: Color = Color::new(4);
pub const BLINK: Color = Color::new(5);
pub const FAST_BLINK: Color = Color::new(6);
pub const REVERSE: Color = Color::new(7);
pub const CONCEALED: Color = Color::new(8);
pub const STRIKETHROUGH: Color = Color::new(9);
