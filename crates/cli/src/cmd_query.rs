// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Query subcommands: build a matcher from the arguments, ask it one question.

use pathmatch::cli::{
    ApplyArgs, Cli, FilterArgs, FiltersArgs, MatchArgs, NextArgs, NextKind, QueryArgs, TrimArgs,
};
use pathmatch::config::{self, Config};
use pathmatch::discovery::resolve_config;
use pathmatch::error::{Error, ExitCode, Result};
use pathmatch::output::{self, QueryReport};
use pathmatch::path::{PathFilter, PathMatcher};

fn load_config(cli: &Cli) -> Result<Option<Config>> {
    let cwd = std::env::current_dir().map_err(|e| Error::Io {
        path: ".".into(),
        source: e,
    })?;

    match resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => config::load_with_warnings(&path).map(Some),
        None => {
            tracing::debug!("no config found");
            Ok(None)
        }
    }
}

/// Union of the inline patterns and the named filters.
///
/// With neither given, every configured filter is used.
fn build_matcher(cli: &Cli, args: &FilterArgs) -> Result<PathMatcher> {
    let inline = PathMatcher::any(args.inline_patterns()?);
    let needs_config = args.patterns.is_empty() || !args.filters.is_empty();
    let config = if needs_config { load_config(cli)? } else { None };

    if args.patterns.is_empty() && args.filters.is_empty() {
        return config.map(|c| c.all_filters()).ok_or_else(|| {
            Error::Argument("no patterns given (use -p, -f, or a pathmatch.toml)".into())
        });
    }

    let mut matcher = inline;
    for name in &args.filters {
        let config = config.as_ref().ok_or_else(|| Error::Config {
            message: format!("filter `{}` requested but no config file found", name),
            path: None,
        })?;
        tracing::debug!("using filter {}", name);
        matcher = matcher.or(&config.filter(name)?);
    }
    tracing::debug!("querying {} patterns", matcher.len());
    Ok(matcher)
}

pub fn run_match(cli: &Cli, args: &MatchArgs) -> anyhow::Result<ExitCode> {
    let matcher = build_matcher(cli, &args.query.filter)?;
    let report = QueryReport::evaluate(&matcher, &args.query.path(), args.strict);
    print!(
        "{}",
        output::format_report(&report, args.query.filter.output)?
    );

    Ok(if report.matches {
        ExitCode::Success
    } else {
        ExitCode::NoMatch
    })
}

pub fn run_next(cli: &Cli, args: &NextArgs) -> anyhow::Result<ExitCode> {
    let matcher = build_matcher(cli, &args.query.filter)?;
    let path = args.query.path();
    let keys = match args.kind {
        NextKind::Keys => matcher.next_keys(&path),
        NextKind::Names => matcher.next_names(&path),
        NextKind::Indices => matcher.next_indices(&path),
    };
    print!("{}", output::format_keys(&keys, args.query.filter.output)?);
    Ok(ExitCode::Success)
}

pub fn run_prev(cli: &Cli, args: &QueryArgs) -> anyhow::Result<ExitCode> {
    let matcher = build_matcher(cli, &args.filter)?;
    let keys = matcher.prev_keys(&args.path());
    print!("{}", output::format_keys(&keys, args.filter.output)?);
    Ok(ExitCode::Success)
}

pub fn run_apply(cli: &Cli, args: &ApplyArgs) -> anyhow::Result<ExitCode> {
    let matcher = build_matcher(cli, &args.filter)?;
    let applied = matcher.apply_keys(args.align.into(), &args.keys);
    print!("{}", output::format_patterns(&applied, args.filter.output)?);
    Ok(ExitCode::Success)
}

pub fn run_trim(cli: &Cli, args: &TrimArgs) -> anyhow::Result<ExitCode> {
    let matcher = build_matcher(cli, &args.filter)?;
    let trimmed = matcher.remove_right(args.count);
    print!("{}", output::format_patterns(&trimmed, args.filter.output)?);
    Ok(ExitCode::Success)
}

pub fn run_filters(cli: &Cli, args: &FiltersArgs) -> anyhow::Result<ExitCode> {
    let config = load_config(cli)?.unwrap_or_default();
    print!("{}", output::format_filters(&config, args.output)?);
    Ok(ExitCode::Success)
}
