//! ANSI escape code rendering.
//!
//! Wraps a message in `ESC[<code>m ... ESC[0m`.

use super::operand::{join_operands, Operand};
use super::strip::strip_codes;
use super::Renderer;
use crate::config::RenderConfig;

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Default renderer producing SGR escape sequences.
///
/// When colors are disabled the code is not applied and any escape
/// sequences already present in the message are stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsiRenderer {
    enabled: bool,
}

impl AnsiRenderer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Create a renderer with colors resolved from `config` and the
    /// `NO_COLOR` environment variable.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.colors_enabled_from_env())
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Wrap `message` with `code`.
    ///
    /// # Arguments
    /// * `code` - The code string, e.g. `"31;1"`
    /// * `message` - The already formatted text
    ///
    /// # Returns
    /// `message` unchanged when `code` is empty, stripped of escape codes when
    /// colors are disabled, otherwise the wrapped message.
    fn wrap(&self, code: &str, message: String) -> String {
        if code.is_empty() {
            return message;
        }
        if !self.enabled {
            return strip_codes(&message);
        }

        let mut buf = String::with_capacity(code.len() + message.len() + 3 + ANSI_RESET.len());
        buf.push_str("\x1b[");
        buf.push_str(code);
        buf.push('m');
        buf.push_str(&message);
        buf.push_str(ANSI_RESET);
        buf
    }
}

impl Default for AnsiRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Renderer for AnsiRenderer {
    fn render_code(&self, code: &str, args: &[&dyn Operand]) -> String {
        if args.is_empty() {
            return String::new();
        }
        self.wrap(code, join_operands(args))
    }

    fn render_string(&self, code: &str, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        self.wrap(code, text.to_string())
    }
}
