//! Match highlighting.
//!
//! Splits a display string into contiguous matched and plain segments. The
//! output is structured data; rendering is left to the caller.

use super::tokenizer::Token;
use serde::Serialize;

/// A span of display text, flagged when it matched a search token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Text exactly as it appears in the source string
    pub text: String,

    /// Whether this span matched a token
    pub is_match: bool,
}

impl Segment {
    /// Create a matched segment.
    pub fn matched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: true,
        }
    }

    /// Create a plain (non-matching) segment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: false,
        }
    }
}

/// Segment `text` by the tokens it contains.
///
/// Greedy, leftmost, longest-first: at each position the longest token that
/// matches (case-insensitively) wins; among tokens of equal length the one
/// listed first wins. Matched segments keep the source text's casing.
/// Concatenating the segments always reproduces `text`.
pub fn highlight(text: &str, tokens: &[Token]) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }
    if tokens.is_empty() {
        return vec![Segment::plain(text)];
    }

    // Stable sort keeps list order among equal lengths.
    let mut by_len: Vec<&Token> = tokens.iter().collect();
    by_len.sort_by_key(|token| std::cmp::Reverse(token.char_len()));
    let sorted: Vec<&str> = by_len.into_iter().map(Token::as_str).collect();

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i < text.len() {
        match match_at(text, i, &sorted) {
            Some(len) => {
                if plain_start < i {
                    segments.push(Segment::plain(&text[plain_start..i]));
                }
                segments.push(Segment::matched(&text[i..i + len]));
                i += len;
                plain_start = i;
            }
            None => {
                // `i` is always on a char boundary.
                let step = text[i..].chars().next().map_or(1, char::len_utf8);
                i += step;
            }
        }
    }

    if plain_start < text.len() {
        segments.push(Segment::plain(&text[plain_start..]));
    }

    segments
}

/// Byte length of the first token matching `text` at byte offset `start`.
///
/// Tokens are ASCII-folded and folding preserves byte length, so a match is a
/// same-length slice that equals the token ignoring ASCII case.
fn match_at(text: &str, start: usize, tokens: &[&str]) -> Option<usize> {
    tokens.iter().find_map(|token| {
        let end = start.checked_add(token.len())?;
        let candidate = text.get(start..end)?;
        candidate.eq_ignore_ascii_case(token).then_some(token.len())
    })
}

/// Concatenate segments back into a string.
pub fn join_segments(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}
