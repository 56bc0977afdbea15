//! Integration tests for the named color shortcuts

use tint::prelude::*;
use tint::{lookup, TintError, NAMED_COLORS};

#[test]
fn shortcuts_match_foreground_sprint() {
    let cases: [(fn(&[&dyn Operand]) -> String, Color); 17] = [
        (tint::red, FG_RED),
        (tint::cyan, FG_CYAN),
        (tint::gray, FG_GRAY),
        (tint::blue, FG_BLUE),
        (tint::black, FG_BLACK),
        (tint::green, FG_GREEN),
        (tint::white, FG_WHITE),
        (tint::yellow, FG_YELLOW),
        (tint::magenta, FG_MAGENTA),
        (tint::normal, FG_DEFAULT),
        (tint::light_red, FG_LIGHT_RED),
        (tint::light_cyan, FG_LIGHT_CYAN),
        (tint::light_blue, FG_LIGHT_BLUE),
        (tint::light_green, FG_LIGHT_GREEN),
        (tint::light_white, FG_LIGHT_WHITE),
        (tint::light_yellow, FG_LIGHT_YELLOW),
        (tint::light_magenta, FG_LIGHT_MAGENTA),
    ];

    for (shortcut, color) in cases {
        assert_eq!(
            shortcut(&[&"msg", &1, &2]),
            color.sprint(&[&"msg", &1, &2]),
            "Failed for {:?}",
            color
        );
    }
}

#[test]
fn named_table_matches_shortcuts() {
    for (name, color) in NAMED_COLORS {
        assert_eq!(lookup(name), Some(*color));
    }
    assert_eq!(lookup("light_white"), Some(FG_LIGHT_WHITE));
}

#[test]
fn names_parse_into_styles() {
    // "bold" is an attribute, not a named color
    let err = "light_red;bold".parse::<Style>().unwrap_err();
    assert!(matches!(err, TintError::InvalidCode { ref value } if value == "bold"));

    let style: Style = "light_red;1".parse().unwrap();
    assert_eq!(style.code(), "91;1");
}
