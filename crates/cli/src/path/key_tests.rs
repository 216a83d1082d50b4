// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    plain_name = { "Threads", KeyKind::Name },
    empty_name = { "", KeyKind::Name },
    numeric_index = { "[3]", KeyKind::Index },
    hex_index = { "[1f]", KeyKind::Index },
    wild_index = { "[]", KeyKind::Index },
    open_bracket_only = { "[3", KeyKind::Name },
    close_bracket_only = { "3]", KeyKind::Name },
    lone_bracket = { "[", KeyKind::Name },
    embedded_brackets = { "a[0]", KeyKind::Name },
)]
fn classifies_by_surface_syntax(key: &str, kind: KeyKind) {
    assert_eq!(KeyKind::of(key), kind);
    assert_eq!(is_index(key), kind == KeyKind::Index);
    assert_eq!(is_name(key), kind == KeyKind::Name);
}

#[test]
fn wildcard_tokens_classify_as_their_own_kind() {
    assert_eq!(KeyKind::of(WILD_NAME), KeyKind::Name);
    assert_eq!(KeyKind::of(WILD_INDEX), KeyKind::Index);
    assert_eq!(KeyKind::Name.wildcard(), "");
    assert_eq!(KeyKind::Index.wildcard(), "[]");
}

#[test]
fn parse_index_strips_brackets() {
    assert_eq!(parse_index("[12]"), Some("12"));
    assert_eq!(parse_index("[]"), Some(""));
    assert_eq!(parse_index("Main"), None);
}

#[test]
fn make_index_wraps_value() {
    assert_eq!(make_index(7), "[7]");
    assert_eq!(make_index("0x10"), "[0x10]");
}
