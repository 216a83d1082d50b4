// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Key paths and the wildcard patterns that filter them.
//!
//! - [`KeyPath`]: a sequence of keys addressing a tree node
//! - [`PathPattern`]: a fixed-length sequence of literal or wildcard positions
//! - [`PathMatcher`]: the OR of a set of patterns
//!
//! Both patterns and matchers implement [`PathFilter`], the query surface a
//! tree walker uses to test nodes, prune subtrees and enumerate the keys
//! worth expanding next.
//!
//! Wildcard tokens are `""` (any name) and `"[]"` (any index). Index keys are
//! written in brackets (`[0]`); every other key is a name.

pub mod filter;
pub mod key;
pub mod key_path;
pub mod matcher;
pub mod pattern;

pub use filter::{Align, PathFilter};
pub use key::{KeyKind, WILD_INDEX, WILD_NAME, is_index, is_name, make_index, parse_index};
pub use key_path::KeyPath;
pub use matcher::PathMatcher;
pub use pattern::{KeyMatcher, PathPattern};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
