// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of query results as text or JSON.
//!
//! Keys are always written as JSON strings, so the wildcard tokens `""` and
//! `"[]"` stay visible in text output.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::path::{KeyPath, PathFilter, PathMatcher, PathPattern};

/// Every predicate of a filter evaluated for one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryReport {
    pub path: KeyPath,
    pub strict: bool,
    pub matches: bool,
    pub successor_could_match: bool,
    pub ancestor_matches: bool,
    pub ancestor_could_match_right: bool,
}

impl QueryReport {
    pub fn evaluate(filter: &dyn PathFilter, path: &KeyPath, strict: bool) -> Self {
        Self {
            path: path.clone(),
            strict,
            matches: filter.matches(path),
            successor_could_match: filter.successor_could_match(path, strict),
            ancestor_matches: filter.ancestor_matches(path, strict),
            ancestor_could_match_right: filter.ancestor_could_match_right(path, strict),
        }
    }
}

/// A configured filter for listing.
#[derive(Debug, Serialize)]
struct FilterSummary<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    patterns: &'a [PathPattern],
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::Internal(e.to_string()))
}

/// Single-line JSON, used for keys and patterns in text output.
fn json_line<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::Internal(e.to_string()))
}

pub fn format_report(report: &QueryReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Text => {
            let rows = [
                ("matches", report.matches),
                ("successor_could_match", report.successor_could_match),
                ("ancestor_matches", report.ancestor_matches),
                ("ancestor_could_match_right", report.ancestor_could_match_right),
            ];
            let mut out = format!("path: {}\n", json_line(&report.path)?);
            for (name, value) in rows {
                out.push_str(&format!("{:<28}{}\n", name, value));
            }
            Ok(out)
        }
    }
}

pub fn format_keys(keys: &BTreeSet<String>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(keys),
        OutputFormat::Text => {
            let mut out = String::new();
            for key in keys {
                out.push_str(&json_line(key)?);
                out.push('\n');
            }
            Ok(out)
        }
    }
}

pub fn format_patterns(matcher: &PathMatcher, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&matcher.iter().collect::<Vec<_>>()),
        OutputFormat::Text => {
            let mut out = String::new();
            for pattern in matcher {
                out.push_str(&json_line(pattern)?);
                out.push('\n');
            }
            Ok(out)
        }
    }
}

pub fn format_filters(config: &Config, format: OutputFormat) -> Result<String> {
    let summaries: Vec<FilterSummary<'_>> = config
        .filters
        .iter()
        .map(|(name, filter)| FilterSummary {
            name,
            description: filter.description.as_deref(),
            patterns: &filter.patterns,
        })
        .collect();

    match format {
        OutputFormat::Json => to_json(&summaries),
        OutputFormat::Text => {
            let mut out = String::new();
            for summary in &summaries {
                match summary.description {
                    Some(description) => {
                        out.push_str(&format!("{}: {}\n", summary.name, description))
                    }
                    None => out.push_str(&format!("{}\n", summary.name)),
                }
                for pattern in summary.patterns {
                    out.push_str(&format!("  {}\n", json_line(pattern)?));
                }
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
