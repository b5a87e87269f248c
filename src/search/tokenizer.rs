//! Query tokenization and the shared case-folding rule.

use serde::Serialize;
use std::fmt;

/// Fold a string for case-insensitive comparison.
///
/// ASCII-only lower-casing. SQLite's `lower()` folds the same way, and the
/// byte length of the input is preserved, which the highlighter relies on.
pub fn fold_case(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// A single normalized search term: non-empty, case-folded, no whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Get the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the token in characters.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split a raw query into search tokens.
///
/// Splits on runs of whitespace and folds case. Duplicates are kept. A blank
/// query yields no tokens, which matches every record.
pub fn tokenize(query: &str) -> Vec<Token> {
    query
        .split_whitespace()
        .map(|word| Token(fold_case(word)))
        .collect()
}
