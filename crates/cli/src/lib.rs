// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wildcard key-path filters for pruning lazily expanded tree searches.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod output;
pub mod path;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{Config, FilterConfig};
pub use error::{Error, ExitCode, Result};
pub use path::{Align, KeyMatcher, KeyPath, PathFilter, PathMatcher, PathPattern};
