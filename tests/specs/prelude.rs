//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use std::process::Command;

/// The pattern used throughout the specs: every named thread of every process.
pub const THREADS: &str = r#"["Processes","[]","Threads",""]"#;

/// Returns a Command configured to run the pathmatch binary.
///
/// Runs in a fresh temp dir so no stray pathmatch.toml is discovered.
pub fn pathmatch_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pathmatch"));
    cmd.env_remove("PATHMATCH_CONFIG");
    cmd.env_remove("PATHMATCH_LOG");
    cmd
}

/// A pathmatch command run from `dir`.
pub fn pathmatch_in(dir: &Path) -> Command {
    let mut cmd = pathmatch_cmd();
    cmd.current_dir(dir);
    cmd
}

/// A temp dir holding a pathmatch.toml with the given content.
pub fn project(config: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    std::fs::write(dir.path().join("pathmatch.toml"), config).unwrap();
    dir
}

/// A temp dir with a git marker and no config.
pub fn empty_project() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}
