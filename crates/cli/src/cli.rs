// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{Error, Result};
use crate::path::{Align, KeyPath, PathPattern};

/// Query wildcard key-path filters
#[derive(Parser)]
#[command(name = "pathmatch")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "PATHMATCH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Test a key path against every predicate; exit 1 if it does not match
    Match(MatchArgs),
    /// List the keys that may follow a key path
    Next(NextArgs),
    /// List the keys that may precede a key path
    Prev(QueryArgs),
    /// Substitute keys for the filter's wildcards
    Apply(ApplyArgs),
    /// Drop trailing positions from every pattern
    Trim(TrimArgs),
    /// List the filters defined in the config file
    Filters(FiltersArgs),
    /// Print a shell completion script
    Completions(CompletionsArgs),
}

/// Where the patterns of a query come from.
#[derive(clap::Args)]
pub struct FilterArgs {
    /// Pattern as a JSON array of keys ("" = any name, "[]" = any index)
    #[arg(short, long = "pattern", value_name = "JSON")]
    pub patterns: Vec<String>,

    /// Named filter from the config file
    #[arg(short, long = "filter", value_name = "NAME")]
    pub filters: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

impl FilterArgs {
    /// Patterns given inline with `-p`.
    pub fn inline_patterns(&self) -> Result<Vec<PathPattern>> {
        self.patterns.iter().map(|p| parse_pattern_arg(p)).collect()
    }
}

#[derive(clap::Args)]
pub struct QueryArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Keys of the path to query
    #[arg(value_name = "KEY")]
    pub keys: Vec<String>,
}

impl QueryArgs {
    pub fn path(&self) -> KeyPath {
        KeyPath::of(self.keys.iter().cloned())
    }
}

#[derive(clap::Args)]
pub struct MatchArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Exclude the path itself from ancestor and successor checks
    #[arg(long)]
    pub strict: bool,
}

#[derive(clap::Args)]
pub struct NextArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Which kinds of key to list
    #[arg(long, default_value = "keys")]
    pub kind: NextKind,
}

#[derive(clap::Args)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// End of the pattern the keys are aligned to
    #[arg(long, default_value = "left")]
    pub align: AlignArg,

    /// Keys to substitute, one per wildcard
    #[arg(value_name = "KEY")]
    pub keys: Vec<String>,
}

#[derive(clap::Args)]
pub struct TrimArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Number of trailing positions to drop
    #[arg(value_name = "COUNT")]
    pub count: usize,
}

#[derive(clap::Args)]
pub struct FiltersArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum NextKind {
    #[default]
    Keys,
    Names,
    Indices,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum AlignArg {
    #[default]
    Left,
    Right,
}

impl From<AlignArg> for Align {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Left => Align::Left,
            AlignArg::Right => Align::Right,
        }
    }
}

/// Parse a `-p` value: a JSON array of key tokens.
pub fn parse_pattern_arg(arg: &str) -> Result<PathPattern> {
    serde_json::from_str(arg)
        .map_err(|e| Error::Argument(format!("invalid pattern {}: {}", arg, e)))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
