//! Word splitting: separate the emphasizable stem from trailing punctuation.

use std::sync::OnceLock;

use regex::Regex;

use super::fraction::{BoldFraction, bold_length};
use super::{Emphasis, Span, Word};

/// Leading run of Unicode word characters (letters, marks, digits, connectors).
fn stem_regex() -> &'static Regex {
    static STEM: OnceLock<Regex> = OnceLock::new();
    STEM.get_or_init(|| Regex::new(r"^\w*").expect("stem pattern is valid"))
}

/// Split a token into `(stem, trailer)`. Either part may be empty.
///
/// `"there!"` -> `("there", "!")`, `"--"` -> `("", "--")`.
pub fn split_word(token: &str) -> (&str, &str) {
    let end = stem_regex().find(token).map_or(0, |m| m.end());
    token.split_at(end)
}

/// Byte offset of the `n`th char of `s` (or `s.len()` past the end).
fn char_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// Transform a single space-delimited token into its spans.
pub fn transform_word(token: &str, fraction: BoldFraction) -> Word<'_> {
    let (stem, _trailer) = split_word(token);
    let bold_len = bold_length(stem.chars().count(), fraction);
    if bold_len == 0 {
        return Word {
            spans: vec![Span {
                text: token,
                emphasis: Emphasis::Normal,
            }],
        };
    }
    // The normal part is the rest of the stem followed by the trailer: one contiguous slice.
    let (bold, normal) = token.split_at(char_offset(stem, bold_len));
    Word {
        spans: vec![
            Span {
                text: bold,
                emphasis: Emphasis::Bold,
            },
            Span {
                text: normal,
                emphasis: Emphasis::Normal,
            },
        ],
    }
}
