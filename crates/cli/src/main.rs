// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pathmatch CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use pathmatch::cli::{Cli, Command};
use pathmatch::error::ExitCode;

mod cmd_query;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("PATHMATCH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("pathmatch: {}", e);
            match e.downcast_ref::<pathmatch::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Match(args)) => cmd_query::run_match(&cli, args),
        Some(Command::Next(args)) => cmd_query::run_next(&cli, args),
        Some(Command::Prev(args)) => cmd_query::run_prev(&cli, args),
        Some(Command::Apply(args)) => cmd_query::run_apply(&cli, args),
        Some(Command::Trim(args)) => cmd_query::run_trim(&cli, args),
        Some(Command::Filters(args)) => cmd_query::run_filters(&cli, args),
        Some(Command::Completions(args)) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "pathmatch", &mut std::io::stdout());
            Ok(ExitCode::Success)
        }
    }
}
