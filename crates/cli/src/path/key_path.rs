// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Immutable sequences of keys addressing a node in a tree.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::key::{is_index, is_name, parse_index};

/// An ordered, possibly empty, sequence of keys.
///
/// The empty path addresses the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyPath {
    keys: Vec<String>,
}

impl KeyPath {
    /// The empty path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from any sequence of keys.
    pub fn of<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key at position `i`, if any.
    pub fn key(&self, i: usize) -> Option<&str> {
        self.keys.get(i).map(String::as_str)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.keys.iter()
    }

    pub fn last_key(&self) -> Option<&str> {
        self.keys.last().map(String::as_str)
    }

    /// The unbracketed index of the last key, if it is an index.
    pub fn index(&self) -> Option<&str> {
        self.last_key().and_then(parse_index)
    }

    /// The last key, if it is a name.
    pub fn name(&self) -> Option<&str> {
        self.last_key().filter(|k| is_name(k))
    }

    /// The path with its last key removed. None for the root.
    pub fn parent(&self) -> Option<Self> {
        self.remove_right(1)
    }

    /// The path with its last `count` keys removed.
    ///
    /// Returns None if the path has fewer than `count` keys.
    pub fn remove_right(&self, count: usize) -> Option<Self> {
        let len = self.keys.len().checked_sub(count)?;
        Some(self.prefix(len))
    }

    /// The first `len` keys (the whole path if `len` exceeds its length).
    pub fn prefix(&self, len: usize) -> Self {
        let len = len.min(self.keys.len());
        Self {
            keys: self.keys[..len].to_vec(),
        }
    }

    /// The path extended by one key.
    pub fn child(&self, key: impl Into<String>) -> Self {
        let mut keys = Vec::with_capacity(self.keys.len() + 1);
        keys.extend_from_slice(&self.keys);
        keys.push(key.into());
        Self { keys }
    }

    /// The path extended by all keys of `sub`.
    pub fn extend(&self, sub: &KeyPath) -> Self {
        let mut keys = Vec::with_capacity(self.keys.len() + sub.keys.len());
        keys.extend_from_slice(&self.keys);
        keys.extend_from_slice(&sub.keys);
        Self { keys }
    }

    /// Check if this path is a (non-strict) ancestor of `other`.
    pub fn is_ancestor_of(&self, other: &KeyPath) -> bool {
        other.keys.starts_with(&self.keys)
    }

    /// The keys of `descendant` below this path.
    ///
    /// Returns None if `descendant` does not descend from this path.
    pub fn relativize(&self, descendant: &KeyPath) -> Option<KeyPath> {
        descendant
            .keys
            .strip_prefix(self.keys.as_slice())
            .map(|rest| Self {
                keys: rest.to_vec(),
            })
    }
}

impl From<Vec<String>> for KeyPath {
    fn from(keys: Vec<String>) -> Self {
        Self { keys }
    }
}

impl<S: Into<String>> FromIterator<S> for KeyPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<'a> IntoIterator for &'a KeyPath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

/// Dotted form: names joined by `.`, index keys appended directly.
impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(f, self.keys.iter().map(String::as_str))
    }
}

pub(super) fn write_dotted<'a>(
    f: &mut fmt::Formatter<'_>,
    keys: impl Iterator<Item = &'a str>,
) -> fmt::Result {
    for (i, key) in keys.enumerate() {
        if i > 0 && !is_index(key) {
            f.write_str(".")?;
        }
        f.write_str(key)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "key_path_tests.rs"]
mod tests;
