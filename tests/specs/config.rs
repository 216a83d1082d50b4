//! Specs for named filters loaded from pathmatch.toml.

use crate::prelude::*;

const CONFIG: &str = r#"
version = 1

[filters.threads]
description = "every thread"
patterns = [["Processes", "[]", "Threads", ""]]

[filters.modules]
patterns = [["Processes", "[]", "Modules"]]
"#;

/// > -f selects a named filter from the discovered config
#[test]
fn named_filter_matches() {
    let dir = project(CONFIG);
    pathmatch_in(dir.path())
        .args(["match", "-f", "modules", "Processes", "[0]", "Modules"])
        .assert()
        .success();
}

/// > without -p or -f every configured filter is used
#[test]
fn all_filters_by_default() {
    let dir = project(CONFIG);
    pathmatch_in(dir.path())
        .args(["next", "Processes", "[0]"])
        .assert()
        .success()
        .stdout("\"Modules\"\n\"Threads\"\n");
}

/// > unknown filter names are config errors (exit 2)
#[test]
fn unknown_filter_exits_two() {
    let dir = project(CONFIG);
    pathmatch_in(dir.path())
        .args(["match", "-f", "sessions", "a"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown filter `sessions`"));
}

/// > filters lists names, descriptions and patterns
#[test]
fn filters_lists_config() {
    let dir = project(CONFIG);
    pathmatch_in(dir.path())
        .arg("filters")
        .assert()
        .success()
        .stdout(
            predicates::str::contains("threads: every thread")
                .and(predicates::str::contains("modules\n")),
        );
}

/// > --config points at a config outside the working directory
#[test]
fn explicit_config_path() {
    let dir = project(CONFIG);
    let elsewhere = empty_project();
    pathmatch_in(elsewhere.path())
        .arg("--config")
        .arg(dir.path().join("pathmatch.toml"))
        .args(["match", "-f", "threads", "Processes", "[2]", "Threads", "Main"])
        .assert()
        .success();
}

/// > unknown config keys warn but do not fail
#[test]
fn unknown_keys_warn() {
    let dir = project("version = 1\ncolour = true\n");
    pathmatch_in(dir.path())
        .arg("filters")
        .assert()
        .success()
        .stderr(predicates::str::contains("unrecognized field `colour`"));
}

/// > unsupported config versions are config errors
#[test]
fn unsupported_version_exits_two() {
    let dir = project("version = 9\n");
    pathmatch_in(dir.path())
        .arg("filters")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 9"));
}
