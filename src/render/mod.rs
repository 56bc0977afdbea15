//! Rendering of codes and operands into terminal text.
//!
//! [`Renderer`] is the seam between the color types and the code that
//! builds escape sequences. [`Paint`] gives `Color` and `Style` their
//! sprint/print method family on top of it.
//!
//! # Module Structure
//!
//! - [`ansi`] - The default SGR renderer
//! - [`operand`] - Print operands and spacing rules
//! - [`strip`] - Escape sequence removal for disabled output

pub mod ansi;
pub mod operand;
pub mod strip;

use std::fmt;
use std::io::{self, Write};
use std::sync::OnceLock;

pub use ansi::AnsiRenderer;
pub use operand::{join_operands, join_operands_spaced, Operand};
pub use strip::strip_codes;

use crate::config::RenderConfig;
use crate::error::TintError;
use crate::output::write_str;

/// Turns a code string and a message into rendered text.
///
/// Implementations must be cheap to share across threads; the global
/// renderer is read from every print call.
pub trait Renderer: Send + Sync {
    /// Join `args` with the operand spacing rules and wrap the result in `code`.
    fn render_code(&self, code: &str, args: &[&dyn Operand]) -> String;

    /// Wrap pre-formatted `text` in `code`.
    fn render_string(&self, code: &str, text: &str) -> String;
}

static GLOBAL: OnceLock<Box<dyn Renderer>> = OnceLock::new();

/// The process-wide renderer.
///
/// Initialized on first use from [`RenderConfig::from_env`] unless
/// [`install`] ran first.
pub fn global() -> &'static dyn Renderer {
    let renderer = GLOBAL.get_or_init(|| {
        let config = RenderConfig::from_env();
        let ansi = AnsiRenderer::from_config(&config);
        tracing::debug!(
            mode = %config.mode,
            enabled = ansi.enabled(),
            "initialized global renderer"
        );
        let boxed: Box<dyn Renderer> = Box::new(ansi);
        boxed
    });
    &**renderer
}

/// Install the process-wide renderer.
///
/// Fails if a renderer is already set, either by a previous `install` or
/// by a print call that initialized the default one.
pub fn install(renderer: impl Renderer + 'static) -> Result<(), TintError> {
    GLOBAL.set(Box::new(renderer)).map_err(|_| {
        tracing::warn!("global renderer already initialized, install ignored");
        TintError::RendererAlreadyInstalled
    })
}

/// Sprint/print family for anything that has a code string.
///
/// The plain methods use the [`global`] renderer; the `_with` variants take
/// one explicitly.
pub trait Paint {
    /// The code string this value renders with, e.g. `"31"` or `"31;47;1"`.
    fn ansi_code(&self) -> String;

    /// Render operands wrapped in this value's code.
    ///
    /// A space is added between operands when neither is a string.
    fn sprint(&self, args: &[&dyn Operand]) -> String {
        self.sprint_with(global(), args)
    }

    /// [`Paint::sprint`] through `renderer` instead of the global one.
    fn sprint_with(&self, renderer: &dyn Renderer, args: &[&dyn Operand]) -> String {
        renderer.render_code(&self.ansi_code(), args)
    }

    /// Render pre-formatted arguments wrapped in this value's code.
    ///
    /// ```
    /// use tint::{Paint, AnsiRenderer, FG_GREEN};
    ///
    /// let renderer = AnsiRenderer::new(true);
    /// let out = FG_GREEN.sprintf_with(&renderer, format_args!("{} passed", 3));
    /// assert_eq!(out, "\x1b[32m3 passed\x1b[0m");
    /// ```
    fn sprintf(&self, args: fmt::Arguments<'_>) -> String {
        self.sprintf_with(global(), args)
    }

    /// [`Paint::sprintf`] through `renderer` instead of the global one.
    fn sprintf_with(&self, renderer: &dyn Renderer, args: fmt::Arguments<'_>) -> String {
        renderer.render_string(&self.ansi_code(), &fmt::format(args))
    }

    /// Like [`Paint::sprint`] with one trailing newline after the wrapped text.
    fn sprintln(&self, args: &[&dyn Operand]) -> String {
        self.sprintln_with(global(), args)
    }

    /// [`Paint::sprintln`] through `renderer` instead of the global one.
    fn sprintln_with(&self, renderer: &dyn Renderer, args: &[&dyn Operand]) -> String {
        let mut out = self.sprint_with(renderer, args);
        out.push('\n');
        out
    }

    /// Write [`Paint::sprint`] output to `writer`.
    fn fprint(&self, mut writer: &mut dyn Write, args: &[&dyn Operand]) -> io::Result<()> {
        write_str(&mut writer, &self.sprint(args))
    }

    /// Write [`Paint::sprintf`] output to `writer`.
    fn fprintf(&self, mut writer: &mut dyn Write, args: fmt::Arguments<'_>) -> io::Result<()> {
        write_str(&mut writer, &self.sprintf(args))
    }

    /// Write [`Paint::sprintln`] output to `writer`.
    fn fprintln(&self, mut writer: &mut dyn Write, args: &[&dyn Operand]) -> io::Result<()> {
        write_str(&mut writer, &self.sprintln(args))
    }

    /// Write [`Paint::sprint`] output to standard output.
    fn print(&self, args: &[&dyn Operand]) -> io::Result<()> {
        self.fprint(&mut io::stdout().lock(), args)
    }

    /// Write [`Paint::sprintf`] output to standard output.
    fn printf(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.fprintf(&mut io::stdout().lock(), args)
    }

    /// Write [`Paint::sprintln`] output to standard output.
    fn println(&self, args: &[&dyn Operand]) -> io::Result<()> {
        self.fprintln(&mut io::stdout().lock(), args)
    }
}
