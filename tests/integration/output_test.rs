//! Integration tests for the unstyled entry points and the print family

use std::io::ErrorKind;

use tint::prelude::*;
use tint::output::write_str;
use tint::{sprint, sprintf, sprintln};

use crate::helpers::FailingWriter;

// ============================================================================
// Unstyled formatting
// ============================================================================

#[test]
fn sprint_spacing_follows_operand_kinds() {
    assert_eq!(sprint(&[&"x=", &1.5, &true]), "x=1.5 true");
}

#[test]
fn sprintf_is_plain_formatting() {
    assert_eq!(sprintf(format_args!("{:<4}|", "ab")), "ab  |");
}

#[test]
fn sprintln_spaces_every_operand() {
    assert_eq!(sprintln(&[&"x=", &1.5]), "x= 1.5\n");
}

// ============================================================================
// Writing
// ============================================================================

#[test]
fn write_str_writes_text_verbatim() {
    let mut buf = Vec::new();
    write_str(&mut buf, "plain \x1b[31mred\x1b[0m\n").unwrap();
    assert_eq!(buf, b"plain \x1b[31mred\x1b[0m\n");
}

#[test]
fn write_str_returns_writer_error_unchanged() {
    let err = write_str(&mut FailingWriter, "x").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BrokenPipe);
    assert_eq!(err.to_string(), "reader closed");
}

#[test]
fn fprint_family_returns_writer_error_unchanged() {
    let style = Style::new([FG_RED, BOLD]);

    let err = FG_RED.fprintln(&mut FailingWriter, &[&"x"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BrokenPipe);

    let err = style.fprint(&mut FailingWriter, &[&"x"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BrokenPipe);

    let err = style.fprintf(&mut FailingWriter, format_args!("{}", 1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BrokenPipe);
}

#[test]
fn fprint_family_writes_what_sprint_returns() {
    let style = Style::new([FG_GREEN, UNDERSCORE]);
    let mut buf = Vec::new();

    style.fprint(&mut buf, &[&"ok", &1, &2]).unwrap();
    style.fprintf(&mut buf, format_args!("{}%", 50)).unwrap();
    FG_RED.fprintln(&mut buf, &[&"done"]).unwrap();

    let expected = [
        style.sprint(&[&"ok", &1, &2]),
        style.sprintf(format_args!("{}%", 50)),
        FG_RED.sprintln(&[&"done"]),
    ]
    .concat();
    assert_eq!(String::from_utf8(buf).unwrap(), expected);
}

// ============================================================================
// Standard output
// ============================================================================

#[test]
fn unstyled_print_functions_write_to_stdout() {
    assert!(tint::print(&[&"a", &1]).is_ok());
    assert!(tint::printf(format_args!("{}\n", 1)).is_ok());
    assert!(tint::println(&[&"a"]).is_ok());
}

#[test]
fn color_print_methods_write_to_stdout() {
    assert!(FG_RED.print(&[&"red", &1]).is_ok());
    assert!(FG_RED.printf(format_args!("{}\n", "red")).is_ok());
    assert!(FG_RED.println(&[&"red"]).is_ok());
}

#[test]
fn style_print_methods_write_to_stdout() {
    let style = Style::new([FG_WHITE, BG_BLUE, BOLD]);
    assert!(style.print(&[&"styled", &2]).is_ok());
    assert!(style.printf(format_args!("{}\n", "styled")).is_ok());
    assert!(style.println(&[&"styled"]).is_ok());
}
