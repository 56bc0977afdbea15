//! tint - ANSI colour codes for terminal text
//!
//! This library provides:
//! - Numeric SGR code constants (foreground, background, bright variants, attributes)
//! - `Color` and `Style` value types with Sprint/Print-style formatting methods
//! - Named shortcuts such as [`red`] and [`light_cyan`]
//! - Unstyled top-level [`sprint`]/[`print`] entry points
//!
//! Escape sequences are produced by a [`Renderer`]. The process-wide default
//! is an [`AnsiRenderer`] configured from the environment (see [`RenderConfig`]).
//!
//! ```
//! use tint::{Style, BG_WHITE, BOLD, FG_RED};
//!
//! let style = Style::new([FG_RED, BG_WHITE, BOLD]);
//! assert_eq!(style.code(), "31;47;1");
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod style;

pub use color::aliases::{
    black, blue, cyan, gray, green, light_blue, light_cyan, light_green, light_magenta,
    light_red, light_white, light_yellow, lookup, magenta, normal, red, white, yellow,
    NAMED_COLORS,
};
pub use color::palette::*;
pub use color::Color;
pub use config::{ColorMode, RenderConfig};
pub use error::TintError;
pub use output::{print, printf, println, sprint, sprintf, sprintln};
pub use render::{AnsiRenderer, Operand, Paint, Renderer};
pub use style::Style;

/// Glob-importable set of the types and traits needed for everyday use.
pub mod prelude {
    pub use crate::color::palette::*;
    pub use crate::{Color, Operand, Paint, Style};
}
