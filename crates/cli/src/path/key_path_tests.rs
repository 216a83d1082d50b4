// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

fn threads_main() -> KeyPath {
    KeyPath::of(["Processes", "[1]", "Threads", "Main"])
}

#[test]
fn root_is_empty() {
    let root = KeyPath::root();
    assert!(root.is_empty());
    assert_eq!(root.len(), 0);
    assert_eq!(root.parent(), None);
    assert_eq!(root.to_string(), "");
}

#[test]
fn key_access() {
    let path = threads_main();
    assert_eq!(path.len(), 4);
    assert_eq!(path.key(1), Some("[1]"));
    assert_eq!(path.key(4), None);
    assert_eq!(path.last_key(), Some("Main"));
    assert_eq!(path.name(), Some("Main"));
    assert_eq!(path.index(), None);
}

#[test]
fn index_of_index_key() {
    let path = KeyPath::of(["Processes", "[1]"]);
    assert_eq!(path.index(), Some("1"));
    assert_eq!(path.name(), None);
}

#[test]
fn parent_and_remove_right() {
    let path = threads_main();
    assert_eq!(
        path.parent(),
        Some(KeyPath::of(["Processes", "[1]", "Threads"]))
    );
    assert_eq!(path.remove_right(4), Some(KeyPath::root()));
    assert_eq!(path.remove_right(5), None);
}

#[test]
fn prefix_clamps_to_length() {
    let path = threads_main();
    assert_eq!(path.prefix(2), KeyPath::of(["Processes", "[1]"]));
    assert_eq!(path.prefix(10), path);
}

#[test]
fn child_and_extend_leave_receiver_unchanged() {
    let base = KeyPath::of(["Processes"]);
    let child = base.child("[1]");
    assert_eq!(child, KeyPath::of(["Processes", "[1]"]));
    assert_eq!(base.len(), 1);

    let full = child.extend(&KeyPath::of(["Threads", "Main"]));
    assert_eq!(full, threads_main());
}

#[test]
fn ancestry() {
    let path = threads_main();
    let ancestor = KeyPath::of(["Processes", "[1]"]);
    assert!(ancestor.is_ancestor_of(&path));
    assert!(path.is_ancestor_of(&path));
    assert!(KeyPath::root().is_ancestor_of(&path));
    assert!(!path.is_ancestor_of(&ancestor));

    assert_eq!(
        ancestor.relativize(&path),
        Some(KeyPath::of(["Threads", "Main"]))
    );
    assert_eq!(path.relativize(&ancestor), None);
}

#[test]
fn display_uses_dotted_form() {
    assert_eq!(threads_main().to_string(), "Processes[1].Threads.Main");
    assert_eq!(KeyPath::of(["[0]", "x"]).to_string(), "[0].x");
}

#[test]
fn equality_is_structural() {
    let a: KeyPath = vec!["a".to_string(), "[0]".to_string()].into();
    let b: KeyPath = ["a", "[0]"].into_iter().collect();
    assert_eq!(a, b);
    assert_ne!(a, KeyPath::of(["[0]", "a"]));
}

#[test]
fn serializes_as_key_sequence() {
    let json = serde_json::to_string(&threads_main()).unwrap();
    assert_eq!(json, r#"["Processes","[1]","Threads","Main"]"#);
    let back: KeyPath = serde_json::from_str(&json).unwrap();
    assert_eq!(back, threads_main());
}
