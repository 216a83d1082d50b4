// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Syntactic classification of path keys.
//!
//! Every key is either a *name* (`Threads`, `Main`, the empty string) or an
//! *index* written in bracketed form (`[0]`, `[1f]`, `[]`). Classification
//! looks only at the surface syntax and is total.

/// Token standing for "any name" at a pattern position.
pub const WILD_NAME: &str = "";

/// Token standing for "any index" at a pattern position.
pub const WILD_INDEX: &str = "[]";

/// The two syntactic kinds of key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Name,
    Index,
}

impl KeyKind {
    /// Classify a key by its surface syntax.
    pub fn of(key: &str) -> Self {
        if is_index(key) {
            KeyKind::Index
        } else {
            KeyKind::Name
        }
    }

    /// The wildcard token that accepts every key of this kind.
    pub fn wildcard(self) -> &'static str {
        match self {
            KeyKind::Name => WILD_NAME,
            KeyKind::Index => WILD_INDEX,
        }
    }
}

/// Check if a key is in bracketed index form.
pub fn is_index(key: &str) -> bool {
    key.starts_with('[') && key.ends_with(']')
}

/// Check if a key is a name (anything not in index form).
pub fn is_name(key: &str) -> bool {
    !is_index(key)
}

/// Strip the brackets from an index key.
///
/// Returns None for name keys.
pub fn parse_index(key: &str) -> Option<&str> {
    if is_index(key) {
        Some(&key[1..key.len() - 1])
    } else {
        None
    }
}

/// Wrap a bare index value in brackets.
pub fn make_index(index: impl std::fmt::Display) -> String {
    format!("[{}]", index)
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod tests;
