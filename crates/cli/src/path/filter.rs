// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The query surface shared by single patterns and pattern sets.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use super::key_path::KeyPath;
use super::matcher::PathMatcher;
use super::pattern::PathPattern;

/// Which end of a pattern anchors key substitution in `apply_keys`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Predicates and transforms over a set of path patterns.
///
/// A filter accepts exactly the union of what its patterns accept. Every
/// operation is pure; transforms return a new [`PathMatcher`].
pub trait PathFilter: Debug + Send + Sync {
    /// Check if `path` matches exactly.
    fn matches(&self, path: &KeyPath) -> bool;

    /// Check if some successor of `path` could match.
    ///
    /// Used to prune subtrees: when false, no descendant of `path` matches.
    fn successor_could_match(&self, path: &KeyPath, strict: bool) -> bool;

    /// Check if some ancestor of `path` matches.
    fn ancestor_matches(&self, path: &KeyPath, strict: bool) -> bool;

    /// Check if `path` could be the tail of a matching path.
    fn ancestor_could_match_right(&self, path: &KeyPath, strict: bool) -> bool;

    /// The one wildcard-free path this filter denotes, if any.
    fn singleton_path(&self) -> Option<KeyPath>;

    /// The only pattern in this filter, if it has exactly one.
    fn singleton_pattern(&self) -> Option<&PathPattern>;

    fn patterns(&self) -> Cow<'_, BTreeSet<PathPattern>>;

    /// Keys (or wildcard tokens) that may follow `path`.
    fn next_keys(&self, path: &KeyPath) -> BTreeSet<String>;

    /// Like [`next_keys`](Self::next_keys), names only.
    fn next_names(&self, path: &KeyPath) -> BTreeSet<String>;

    /// Like [`next_keys`](Self::next_keys), indices only.
    fn next_indices(&self, path: &KeyPath) -> BTreeSet<String>;

    /// Keys (or wildcard tokens) that may precede `path`.
    fn prev_keys(&self, path: &KeyPath) -> BTreeSet<String>;

    /// Check if this filter matches nothing.
    fn is_none(&self) -> bool {
        self.patterns().is_empty()
    }

    fn apply_keys(&self, align: Align, keys: &[String]) -> PathMatcher;

    fn remove_right(&self, count: usize) -> PathMatcher;

    /// Union of this filter's patterns with another's.
    fn or(&self, other: &dyn PathFilter) -> PathMatcher {
        PathMatcher::any(
            self.patterns()
                .iter()
                .chain(other.patterns().iter())
                .cloned(),
        )
    }
}

impl PathFilter for PathPattern {
    fn matches(&self, path: &KeyPath) -> bool {
        PathPattern::matches(self, path)
    }

    fn successor_could_match(&self, path: &KeyPath, strict: bool) -> bool {
        PathPattern::successor_could_match(self, path, strict)
    }

    fn ancestor_matches(&self, path: &KeyPath, strict: bool) -> bool {
        PathPattern::ancestor_matches(self, path, strict)
    }

    fn ancestor_could_match_right(&self, path: &KeyPath, strict: bool) -> bool {
        PathPattern::ancestor_could_match_right(self, path, strict)
    }

    fn singleton_path(&self) -> Option<KeyPath> {
        PathPattern::singleton_path(self)
    }

    fn singleton_pattern(&self) -> Option<&PathPattern> {
        Some(self)
    }

    fn patterns(&self) -> Cow<'_, BTreeSet<PathPattern>> {
        Cow::Owned(BTreeSet::from([self.clone()]))
    }

    fn next_keys(&self, path: &KeyPath) -> BTreeSet<String> {
        PathPattern::next_keys(self, path)
    }

    fn next_names(&self, path: &KeyPath) -> BTreeSet<String> {
        PathPattern::next_names(self, path)
    }

    fn next_indices(&self, path: &KeyPath) -> BTreeSet<String> {
        PathPattern::next_indices(self, path)
    }

    fn prev_keys(&self, path: &KeyPath) -> BTreeSet<String> {
        PathPattern::prev_keys(self, path)
    }

    fn is_none(&self) -> bool {
        false
    }

    fn apply_keys(&self, align: Align, keys: &[String]) -> PathMatcher {
        PathMatcher::from(PathPattern::apply_keys(self, align, keys))
    }

    fn remove_right(&self, count: usize) -> PathMatcher {
        PathMatcher::any(PathPattern::remove_right(self, count))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
