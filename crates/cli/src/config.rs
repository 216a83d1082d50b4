// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! A pathmatch.toml names reusable filters:
//!
//! ```toml
//! version = 1
//!
//! [filters.threads]
//! description = "every thread of every process"
//! patterns = [["Processes", "[]", "Threads", ""]]
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::path::{PathMatcher, PathPattern};

/// The only config version this build understands.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "filters"];

/// Known keys inside a `[filters.<name>]` table.
const KNOWN_FILTER_KEYS: &[&str] = &["description", "patterns"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    filters: BTreeMap<String, toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Named filters.
    #[serde(default)]
    pub filters: BTreeMap<String, FilterConfig>,
}

/// A named filter: the OR of its patterns.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Free-form description shown by `pathmatch filters`.
    pub description: Option<String>,

    /// Patterns as token lists; `""` is any name, `"[]"` any index.
    #[serde(default)]
    pub patterns: Vec<PathPattern>,
}

impl FilterConfig {
    pub fn matcher(&self) -> PathMatcher {
        PathMatcher::any(self.patterns.iter().cloned())
    }
}

impl Config {
    /// The matcher for one named filter.
    pub fn filter(&self, name: &str) -> Result<PathMatcher> {
        self.filters
            .get(name)
            .map(FilterConfig::matcher)
            .ok_or_else(|| Error::Config {
                message: format!("unknown filter `{}`", name),
                path: None,
            })
    }

    /// The union of every configured filter.
    pub fn all_filters(&self) -> PathMatcher {
        PathMatcher::any(
            self.filters
                .values()
                .flat_map(|f| f.patterns.iter().cloned()),
        )
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse(&content, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse_with_warnings(&content, path)
}

fn read(path: &Path) -> Result<String> {
    tracing::debug!("loading config from {}", path.display());
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn config_error(path: &Path, message: impl Into<String>) -> Error {
    Error::Config {
        message: message.into(),
        path: Some(path.to_path_buf()),
    }
}

fn check_version(version: i64, path: &Path) -> Result<()> {
    if version != SUPPORTED_VERSION {
        return Err(config_error(
            path,
            format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
        ));
    }
    Ok(())
}

/// Parse config from string content (strict mode).
///
/// Unknown keys are errors.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error(path, "missing required field: version"))?;
    check_version(version, path)?;

    toml::from_str(content).map_err(|e| config_error(path, e.to_string()))
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;
    check_version(flexible.version, path)?;

    let mut unknown_keys = BTreeSet::new();
    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown_keys.insert(key.clone());
        }
    }

    let mut filters = BTreeMap::new();
    for (name, value) in flexible.filters {
        let toml::Value::Table(table) = value else {
            return Err(config_error(
                path,
                format!("filter `{}` must be a table", name),
            ));
        };
        for key in table.keys() {
            if !KNOWN_FILTER_KEYS.contains(&key.as_str()) {
                unknown_keys.insert(format!("filters.{}.{}", name, key));
            }
        }
        let known: toml::Table = table
            .into_iter()
            .filter(|(key, _)| KNOWN_FILTER_KEYS.contains(&key.as_str()))
            .collect();
        let filter: FilterConfig = toml::Value::Table(known)
            .try_into()
            .map_err(|e: toml::de::Error| {
                config_error(path, format!("filter `{}`: {}", name, e))
            })?;
        filters.insert(name, filter);
    }

    for key in &unknown_keys {
        warn_unknown_key(path, key);
    }

    Ok(Config {
        version: flexible.version,
        filters,
    })
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "pathmatch: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
