// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn finds_config_in_current_dir() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("pathmatch.toml");
    fs::write(&config_path, "version = 1\n").unwrap();

    assert_eq!(find_config(dir.path()), Some(config_path));
}

#[test]
fn finds_config_in_parent_dir() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("pathmatch.toml");
    fs::write(&config_path, "version = 1\n").unwrap();

    let subdir = dir.path().join("subdir");
    fs::create_dir(&subdir).unwrap();

    assert_eq!(find_config(&subdir), Some(config_path));
}

#[test]
fn stops_at_git_root() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    let subdir = dir.path().join("subdir");
    fs::create_dir(&subdir).unwrap();

    assert_eq!(find_config(&subdir), None);
}

#[test]
fn explicit_path_must_exist() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = resolve_config(Some(&missing), dir.path()).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("config file not found"));
}

#[test]
fn explicit_path_wins_over_discovery() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("pathmatch.toml"), "version = 1\n").unwrap();
    let explicit = dir.path().join("other.toml");
    fs::write(&explicit, "version = 1\n").unwrap();

    let resolved = resolve_config(Some(&explicit), dir.path()).unwrap();
    assert_eq!(resolved, Some(explicit));
}
