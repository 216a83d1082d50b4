// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern sets: the OR of any number of path patterns.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

use super::filter::{Align, PathFilter};
use super::key::{KeyKind, WILD_INDEX, WILD_NAME, is_index, is_name};
use super::key_path::KeyPath;
use super::pattern::PathPattern;

/// An immutable set of patterns; a path matches if any pattern matches.
///
/// The empty set matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathMatcher {
    patterns: BTreeSet<PathPattern>,
}

impl PathMatcher {
    /// The matcher that matches nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Collect patterns into a matcher, collapsing duplicates.
    pub fn any(patterns: impl IntoIterator<Item = PathPattern>) -> Self {
        let patterns: BTreeSet<PathPattern> = patterns.into_iter().collect();
        tracing::trace!("built matcher with {} patterns", patterns.len());
        Self { patterns }
    }

    /// Union of the pattern sets of several filters.
    pub fn union<'a>(filters: impl IntoIterator<Item = &'a dyn PathFilter>) -> Self {
        Self::any(
            filters
                .into_iter()
                .flat_map(|f| f.patterns().into_owned()),
        )
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> std::collections::btree_set::Iter<'_, PathPattern> {
        self.patterns.iter()
    }

    // TODO: index patterns by position (a trie) once filters with many
    // patterns show up in traversal profiles.
    fn any_pattern(&self, pred: impl Fn(&PathPattern) -> bool) -> bool {
        self.patterns.iter().any(pred)
    }

    fn union_of(&self, query: impl Fn(&PathPattern) -> BTreeSet<String>) -> BTreeSet<String> {
        let mut result = BTreeSet::new();
        for pattern in &self.patterns {
            result.extend(query(pattern));
        }
        result
    }

    /// Union of one kind of key, stopping at the first wildcard of that kind.
    fn union_of_kind(
        &self,
        kind: KeyKind,
        query: impl Fn(&PathPattern) -> BTreeSet<String>,
    ) -> BTreeSet<String> {
        let wild = kind.wildcard();
        let mut result = BTreeSet::new();
        for pattern in &self.patterns {
            result.extend(query(pattern));
            if result.contains(wild) {
                return BTreeSet::from([wild.to_string()]);
            }
        }
        result
    }
}

/// Collapse concrete keys into the wildcard token of their kind, if present.
fn coalesce_wilds(result: &mut BTreeSet<String>) {
    if result.contains(WILD_NAME) {
        result.retain(|k| !is_name(k));
        result.insert(WILD_NAME.to_string());
    }
    if result.contains(WILD_INDEX) {
        result.retain(|k| !is_index(k));
        result.insert(WILD_INDEX.to_string());
    }
}

impl PathFilter for PathMatcher {
    fn matches(&self, path: &KeyPath) -> bool {
        self.any_pattern(|p| p.matches(path))
    }

    fn successor_could_match(&self, path: &KeyPath, strict: bool) -> bool {
        self.any_pattern(|p| p.successor_could_match(path, strict))
    }

    fn ancestor_matches(&self, path: &KeyPath, strict: bool) -> bool {
        self.any_pattern(|p| p.ancestor_matches(path, strict))
    }

    fn ancestor_could_match_right(&self, path: &KeyPath, strict: bool) -> bool {
        self.any_pattern(|p| p.ancestor_could_match_right(path, strict))
    }

    fn singleton_path(&self) -> Option<KeyPath> {
        self.singleton_pattern()?.singleton_path()
    }

    fn singleton_pattern(&self) -> Option<&PathPattern> {
        if self.patterns.len() != 1 {
            return None;
        }
        self.patterns.first()
    }

    fn patterns(&self) -> Cow<'_, BTreeSet<PathPattern>> {
        Cow::Borrowed(&self.patterns)
    }

    fn next_keys(&self, path: &KeyPath) -> BTreeSet<String> {
        let mut result = self.union_of(|p| p.next_keys(path));
        coalesce_wilds(&mut result);
        result
    }

    fn next_names(&self, path: &KeyPath) -> BTreeSet<String> {
        self.union_of_kind(KeyKind::Name, |p| p.next_names(path))
    }

    fn next_indices(&self, path: &KeyPath) -> BTreeSet<String> {
        self.union_of_kind(KeyKind::Index, |p| p.next_indices(path))
    }

    fn prev_keys(&self, path: &KeyPath) -> BTreeSet<String> {
        let mut result = self.union_of(|p| p.prev_keys(path));
        coalesce_wilds(&mut result);
        result
    }

    fn is_none(&self) -> bool {
        self.patterns.is_empty()
    }

    fn apply_keys(&self, align: Align, keys: &[String]) -> PathMatcher {
        Self::any(self.patterns.iter().map(|p| p.apply_keys(align, keys)))
    }

    fn remove_right(&self, count: usize) -> PathMatcher {
        let mut patterns = BTreeSet::new();
        for pattern in &self.patterns {
            pattern.do_remove_right(count, &mut patterns);
        }
        tracing::trace!(
            "removed {} positions: {} of {} patterns remain",
            count,
            patterns.len(),
            self.patterns.len()
        );
        Self { patterns }
    }

    fn or(&self, other: &dyn PathFilter) -> PathMatcher {
        let mut patterns = self.patterns.clone();
        patterns.extend(other.patterns().iter().cloned());
        Self { patterns }
    }
}

impl From<PathPattern> for PathMatcher {
    fn from(pattern: PathPattern) -> Self {
        Self {
            patterns: BTreeSet::from([pattern]),
        }
    }
}

impl FromIterator<PathPattern> for PathMatcher {
    fn from_iter<I: IntoIterator<Item = PathPattern>>(iter: I) -> Self {
        Self::any(iter)
    }
}

impl<'a> IntoIterator for &'a PathMatcher {
    type Item = &'a PathPattern;
    type IntoIter = std::collections::btree_set::Iter<'a, PathPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

impl fmt::Display for PathMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<PathMatcher")?;
        for pattern in &self.patterns {
            write!(f, "\n  {}", pattern)?;
        }
        write!(f, "\n>")
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
