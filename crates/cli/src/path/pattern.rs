// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-length wildcard patterns over key paths.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::filter::Align;
use super::key::{KeyKind, WILD_INDEX, WILD_NAME, is_index, is_name, make_index, parse_index};
use super::key_path::{KeyPath, write_dotted};

/// What a single pattern position accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyMatcher {
    /// Exactly this key.
    Literal(String),
    /// Any name key. Written `""`.
    WildName,
    /// Any index key. Written `"[]"`.
    WildIndex,
}

impl KeyMatcher {
    /// Read a pattern token: `""` and `"[]"` are wildcards, anything else is literal.
    pub fn from_key(key: impl Into<String>) -> Self {
        let key = key.into();
        match key.as_str() {
            WILD_NAME => KeyMatcher::WildName,
            WILD_INDEX => KeyMatcher::WildIndex,
            _ => KeyMatcher::Literal(key),
        }
    }

    /// The token this matcher is written as.
    pub fn as_key(&self) -> &str {
        match self {
            KeyMatcher::Literal(key) => key,
            KeyMatcher::WildName => WILD_NAME,
            KeyMatcher::WildIndex => WILD_INDEX,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        !matches!(self, KeyMatcher::Literal(_))
    }

    /// Check if this position accepts `key`.
    pub fn accepts(&self, key: &str) -> bool {
        match self {
            KeyMatcher::Literal(lit) => lit == key,
            KeyMatcher::WildName => is_name(key),
            KeyMatcher::WildIndex => is_index(key),
        }
    }

    /// Matcher produced by substituting `key` into this position.
    ///
    /// Literals are returned unchanged. The result is read back as a token,
    /// so substituting `""` or `"[]"` leaves a wildcard.
    fn substitute(&self, key: &str) -> KeyMatcher {
        match self {
            KeyMatcher::Literal(_) => self.clone(),
            KeyMatcher::WildName => KeyMatcher::from_key(key),
            KeyMatcher::WildIndex if is_index(key) => KeyMatcher::from_key(key),
            KeyMatcher::WildIndex => KeyMatcher::from_key(make_index(key)),
        }
    }

    /// Rewrite a literal spelled like a wildcard token into that wildcard.
    fn normalize(self) -> KeyMatcher {
        match self {
            KeyMatcher::Literal(key) => KeyMatcher::from_key(key),
            wild => wild,
        }
    }
}

/// A fixed-length sequence of per-position matchers.
///
/// A path matches when it has exactly the pattern's length and every key is
/// accepted by the matcher at its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathPattern {
    matchers: Vec<KeyMatcher>,
}

impl PathPattern {
    /// Build a pattern from matchers.
    ///
    /// `Literal("")` and `Literal("[]")` are read as the wildcards they spell.
    pub fn new(matchers: Vec<KeyMatcher>) -> Self {
        Self {
            matchers: matchers.into_iter().map(KeyMatcher::normalize).collect(),
        }
    }

    /// Build a pattern from its tokens (`""` and `"[]"` are wildcards).
    pub fn of<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            matchers: keys.into_iter().map(KeyMatcher::from_key).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn matchers(&self) -> &[KeyMatcher] {
        &self.matchers
    }

    /// The pattern's tokens as a key path.
    pub fn as_path(&self) -> KeyPath {
        KeyPath::of(self.matchers.iter().map(KeyMatcher::as_key))
    }

    pub fn count_wildcards(&self) -> usize {
        self.matchers.iter().filter(|m| m.is_wildcard()).count()
    }

    /// Check the first `len` keys of `path` against the first `len` positions.
    fn matches_up_to(&self, path: &KeyPath, len: usize) -> bool {
        self.matchers
            .iter()
            .zip(path.iter())
            .take(len)
            .all(|(m, key)| m.accepts(key))
    }

    /// Check the last `len` keys of `path` against the last `len` positions.
    fn matches_back_to(&self, path: &KeyPath, len: usize) -> bool {
        self.matchers
            .iter()
            .rev()
            .zip(path.iter().rev())
            .take(len)
            .all(|(m, key)| m.accepts(key))
    }

    pub fn matches(&self, path: &KeyPath) -> bool {
        path.len() == self.len() && self.matches_up_to(path, path.len())
    }

    /// Check if `path` is a prefix some matching path could extend.
    ///
    /// With `strict`, `path` itself must be shorter than the pattern.
    pub fn successor_could_match(&self, path: &KeyPath, strict: bool) -> bool {
        if path.len() > self.len() || (strict && path.len() == self.len()) {
            return false;
        }
        self.matches_up_to(path, path.len())
    }

    /// Check if the ancestor of `path` at the pattern's depth matches.
    ///
    /// With `strict`, `path` itself does not count as its own ancestor.
    pub fn ancestor_matches(&self, path: &KeyPath, strict: bool) -> bool {
        if path.len() < self.len() || (strict && path.len() == self.len()) {
            return false;
        }
        self.matches_up_to(path, self.len())
    }

    /// Check if `path` could be the tail of a matching path.
    ///
    /// `path` is aligned against the right end of the pattern. With `strict`,
    /// at least one key must remain to be prepended.
    pub fn ancestor_could_match_right(&self, path: &KeyPath, strict: bool) -> bool {
        if path.len() > self.len() || (strict && path.len() == self.len()) {
            return false;
        }
        self.matches_back_to(path, path.len())
    }

    /// The one path this pattern denotes, if it has no wildcards.
    pub fn singleton_path(&self) -> Option<KeyPath> {
        if self.matchers.iter().any(KeyMatcher::is_wildcard) {
            return None;
        }
        Some(self.as_path())
    }

    /// Tokens acceptable immediately after `path`.
    pub fn next_keys(&self, path: &KeyPath) -> BTreeSet<String> {
        if path.len() >= self.len() || !self.matches_up_to(path, path.len()) {
            return BTreeSet::new();
        }
        self.token_at(path.len())
    }

    pub fn next_names(&self, path: &KeyPath) -> BTreeSet<String> {
        self.next_of_kind(path, KeyKind::Name)
    }

    pub fn next_indices(&self, path: &KeyPath) -> BTreeSet<String> {
        self.next_of_kind(path, KeyKind::Index)
    }

    fn next_of_kind(&self, path: &KeyPath, kind: KeyKind) -> BTreeSet<String> {
        let mut keys = self.next_keys(path);
        keys.retain(|k| KeyKind::of(k) == kind);
        keys
    }

    /// Tokens acceptable immediately before `path`, aligned to the right.
    pub fn prev_keys(&self, path: &KeyPath) -> BTreeSet<String> {
        if path.len() >= self.len() || !self.matches_back_to(path, path.len()) {
            return BTreeSet::new();
        }
        self.token_at(self.len() - 1 - path.len())
    }

    fn token_at(&self, i: usize) -> BTreeSet<String> {
        self.matchers
            .get(i)
            .map(|m| m.as_key().to_string())
            .into_iter()
            .collect()
    }

    /// Substitute `keys` for wildcards, anchored at the `align` end.
    ///
    /// Wildcards are filled one key each, walking from the anchor. When keys
    /// run out the remaining wildcards are kept; surplus keys are ignored.
    /// Keys filling an index wildcard are bracketed unless they already are.
    pub fn apply_keys(&self, align: Align, keys: &[String]) -> PathPattern {
        let mut matchers = self.matchers.clone();
        let (slots, keys): (Vec<&mut KeyMatcher>, Vec<&String>) = match align {
            Align::Left => (
                matchers.iter_mut().filter(|m| m.is_wildcard()).collect(),
                keys.iter().collect(),
            ),
            Align::Right => (
                matchers.iter_mut().rev().filter(|m| m.is_wildcard()).collect(),
                keys.iter().rev().collect(),
            ),
        };
        for (slot, key) in slots.into_iter().zip(keys) {
            *slot = slot.substitute(key);
        }
        PathPattern { matchers }
    }

    /// Keys `path` supplies for this pattern's wildcards, in order.
    ///
    /// Index keys are unbracketed. With `match_length` the path must match
    /// exactly; otherwise only its prefix of the pattern's length is checked.
    pub fn match_keys(&self, path: &KeyPath, match_length: bool) -> Option<Vec<String>> {
        if path.len() < self.len() || (match_length && path.len() != self.len()) {
            return None;
        }
        let mut keys = Vec::with_capacity(self.count_wildcards());
        for (m, key) in self.matchers.iter().zip(path.iter()) {
            if !m.accepts(key) {
                return None;
            }
            match m {
                KeyMatcher::Literal(_) => {}
                KeyMatcher::WildName => keys.push(key.clone()),
                KeyMatcher::WildIndex => keys.push(parse_index(key).unwrap_or(key).to_string()),
            }
        }
        Some(keys)
    }

    /// The pattern with its last `count` positions dropped.
    ///
    /// Returns None if the pattern is shorter than `count`.
    pub fn remove_right(&self, count: usize) -> Option<PathPattern> {
        let len = self.len().checked_sub(count)?;
        Some(PathPattern {
            matchers: self.matchers[..len].to_vec(),
        })
    }

    /// Add the result of [`remove_right`](Self::remove_right) to `into`.
    pub fn do_remove_right(&self, count: usize, into: &mut BTreeSet<PathPattern>) {
        if let Some(truncated) = self.remove_right(count) {
            into.insert(truncated);
        }
    }
}

impl From<KeyPath> for PathPattern {
    fn from(path: KeyPath) -> Self {
        Self::of(path.keys().iter().cloned())
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(f, self.matchers.iter().map(KeyMatcher::as_key))
    }
}

impl Serialize for PathPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.matchers.iter().map(KeyMatcher::as_key))
    }
}

impl<'de> Deserialize<'de> for PathPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<String>::deserialize(deserializer).map(PathPattern::of)
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
