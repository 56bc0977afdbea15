//! Print operands and the spacing rules used to join them.

use std::borrow::Cow;
use std::fmt::{self, Display, Write as _};

/// A value that can be passed to the sprint/print family.
///
/// `is_text` decides spacing: [`join_operands`] adds a space between two
/// adjacent operands only when neither of them is text.
pub trait Operand: Display {
    /// Whether this operand is a string.
    fn is_text(&self) -> bool {
        false
    }
}

impl Operand for str {
    fn is_text(&self) -> bool {
        true
    }
}

impl Operand for String {
    fn is_text(&self) -> bool {
        true
    }
}

impl Operand for Cow<'_, str> {
    fn is_text(&self) -> bool {
        true
    }
}

impl Operand for fmt::Arguments<'_> {
    fn is_text(&self) -> bool {
        true
    }
}

impl<T: Operand + ?Sized> Operand for &T {
    fn is_text(&self) -> bool {
        (**self).is_text()
    }
}

macro_rules! value_operands {
    ($($ty:ty),* $(,)?) => {
        $(impl Operand for $ty {})*
    };
}

value_operands!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    crate::Color, crate::Style,
);

/// Concatenate operands, adding a space between two operands when neither
/// is text.
pub fn join_operands(args: &[&dyn Operand]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 && !arg.is_text() && !args[i - 1].is_text() {
            out.push(' ');
        }
        // Writing into a String cannot fail
        let _ = write!(out, "{}", arg);
    }
    out
}

/// Concatenate operands with a space between every pair.
pub fn join_operands_spaced(args: &[&dyn Operand]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", arg);
    }
    out
}
