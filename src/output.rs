//! Unstyled print entry points.
//!
//! These mirror the styled methods on [`Paint`](crate::Paint) without a
//! code, for output that should not be colored.

use std::fmt;
use std::io::{self, Write};

use crossterm::{execute, style::Print};

use crate::render::{join_operands, join_operands_spaced, Operand};

/// Formats operands and returns the resulting string.
///
/// Spaces are added between operands when neither is a string.
pub fn sprint(args: &[&dyn Operand]) -> String {
    join_operands(args)
}

/// Formats pre-formatted arguments and returns the resulting string.
pub fn sprintf(args: fmt::Arguments<'_>) -> String {
    fmt::format(args)
}

/// Formats operands and returns the resulting string.
///
/// Spaces are always added between operands and a newline is appended.
pub fn sprintln(args: &[&dyn Operand]) -> String {
    let mut out = join_operands_spaced(args);
    out.push('\n');
    out
}

/// Formats operands and writes them to standard output.
///
/// Spaces are added between operands when neither is a string.
pub fn print(args: &[&dyn Operand]) -> io::Result<()> {
    write_str(&mut io::stdout().lock(), &sprint(args))
}

/// Writes pre-formatted arguments to standard output.
pub fn printf(args: fmt::Arguments<'_>) -> io::Result<()> {
    write_str(&mut io::stdout().lock(), &sprintf(args))
}

/// Formats operands and writes them to standard output.
///
/// Spaces are always added between operands and a newline is appended.
pub fn println(args: &[&dyn Operand]) -> io::Result<()> {
    write_str(&mut io::stdout().lock(), &sprintln(args))
}

/// Write `text` to `writer` and flush it.
///
/// Errors from the writer are returned as-is.
pub fn write_str<W: Write>(writer: &mut W, text: &str) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    execute!(writer, Print(text))
}
