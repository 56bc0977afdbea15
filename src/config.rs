//! Color output configuration.
//!
//! Hosts can embed [`RenderConfig`] in their own serde config (e.g. a
//! `[color]` TOML table) or read it from the environment:
//!
//! - `TINT_COLOR` - `auto`, `always` or `never`
//! - `NO_COLOR` - when set and non-empty, `auto` disables colors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TintError;

/// Environment variable holding the color mode.
pub const COLOR_MODE_ENV: &str = "TINT_COLOR";

/// Environment variable of the NO_COLOR convention (https://no-color.org).
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// When to emit escape codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colors on unless `NO_COLOR` is set
    #[default]
    Auto,
    /// Colors on, `NO_COLOR` is ignored
    Always,
    /// Colors off; existing codes are stripped from styled output
    Never,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = TintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(TintError::InvalidColorMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Configuration for the default renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub mode: ColorMode,
}

impl RenderConfig {
    pub fn new(mode: ColorMode) -> Self {
        Self { mode }
    }

    /// Read the configuration from `TINT_COLOR`.
    ///
    /// An unset variable means `auto`; an invalid one is logged and also
    /// treated as `auto`.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(COLOR_MODE_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let mode = match value {
            None => ColorMode::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e: TintError| {
                tracing::warn!(value = raw, error = %e, "ignoring {}", COLOR_MODE_ENV);
                ColorMode::default()
            }),
        };
        Self { mode }
    }

    /// Whether colors are enabled given the state of `NO_COLOR`.
    pub fn colors_enabled(&self, no_color: bool) -> bool {
        match self.mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => !no_color,
        }
    }

    /// [`RenderConfig::colors_enabled`] with `NO_COLOR` read from the environment.
    pub fn colors_enabled_from_env(&self) -> bool {
        self.colors_enabled(no_color_set())
    }
}

/// `NO_COLOR` is present and not empty.
pub fn no_color_set() -> bool {
    std::env::var_os(NO_COLOR_ENV).is_some_and(|v| !v.is_empty())
}
