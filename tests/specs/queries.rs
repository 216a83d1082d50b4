//! Specs for the query subcommands with inline patterns.

use crate::prelude::*;

/// > match exits 0 and reports every predicate when the path matches
#[test]
fn match_success() {
    pathmatch_cmd()
        .args(["match", "-p", THREADS, "Processes", "[1]", "Threads", "Main"])
        .assert()
        .success()
        .stdout(predicates::str::contains("matches                     true"));
}

/// > match exits 1 when the path does not match
#[test]
fn match_wrong_key_kind_exits_one() {
    pathmatch_cmd()
        .args(["match", "-p", THREADS, "Processes", "proc1", "Threads", "Main"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("matches                     false"));
}

/// > a proper prefix does not match but could still have matching successors
#[test]
fn match_prefix_reports_successor() {
    pathmatch_cmd()
        .args(["match", "--strict", "-p", THREADS, "-o", "json"])
        .args(["Processes", "[1]", "Threads"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains(r#""successor_could_match": true"#));
}

/// > next lists the index wildcard after a literal
#[test]
fn next_after_literal() {
    pathmatch_cmd()
        .args(["next", "-p", THREADS, "Processes"])
        .assert()
        .success()
        .stdout("\"[]\"\n");
}

/// > next coalesces literal names under the name wildcard
#[test]
fn next_names_coalesce() {
    pathmatch_cmd()
        .args(["next", "--kind", "names"])
        .args(["-p", r#"["a","x"]"#, "-p", r#"["a",""]"#, "-p", r#"["a","[0]"]"#])
        .arg("a")
        .assert()
        .success()
        .stdout("\"\"\n");
}

/// > prev walks backward from a tail
#[test]
fn prev_from_tail() {
    pathmatch_cmd()
        .args(["prev", "-p", THREADS, "Threads", "Main"])
        .assert()
        .success()
        .stdout("\"[]\"\n");
}

/// > apply substitutes keys into wildcards from the left
#[test]
fn apply_left() {
    pathmatch_cmd()
        .args(["apply", "-p", THREADS, "1", "Main"])
        .assert()
        .success()
        .stdout("[\"Processes\",\"[1]\",\"Threads\",\"Main\"]\n");
}

/// > apply --align right anchors substitution at the right end
#[test]
fn apply_right() {
    pathmatch_cmd()
        .args(["apply", "--align", "right", "-p", THREADS, "Main"])
        .assert()
        .success()
        .stdout("[\"Processes\",\"[]\",\"Threads\",\"Main\"]\n");
}

/// > trim drops trailing positions and patterns too short to trim
#[test]
fn trim_patterns() {
    pathmatch_cmd()
        .args(["trim", "-p", THREADS, "-p", r#"["Sessions"]"#, "2"])
        .assert()
        .success()
        .stdout("[\"Processes\",\"[]\"]\n");
}

/// > malformed inline patterns are argument errors (exit 2)
#[test]
fn invalid_pattern_exits_two() {
    pathmatch_cmd()
        .args(["match", "-p", "Processes.Threads", "Processes"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid pattern"));
}

/// > with no patterns and no config, queries are argument errors
#[test]
fn no_patterns_exits_two() {
    let dir = empty_project();
    pathmatch_in(dir.path())
        .args(["match", "a"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("no patterns given"));
}
