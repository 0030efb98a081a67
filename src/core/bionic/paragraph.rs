//! Paragraph segmentation on blank lines.

use std::sync::OnceLock;

use regex::Regex;

/// A newline, optional whitespace (possibly more newlines), then another newline.
fn blank_line_regex() -> &'static Regex {
    static BLANK_LINE: OnceLock<Regex> = OnceLock::new();
    BLANK_LINE.get_or_init(|| Regex::new(r"\r?\n\s*\n").expect("blank line pattern is valid"))
}

/// Split a document into `(break_before, body)` pairs in reading order.
///
/// `break_before` is the exact blank-line text that preceded `body` (empty for the
/// first paragraph). A document without blank lines yields a single pair, and the
/// empty document yields `("", "")`.
pub fn split_paragraphs(document: &str) -> impl Iterator<Item = (&str, &str)> {
    let mut breaks = blank_line_regex().find_iter(document);
    let mut cursor = 0;
    let mut pending_break = "";
    let mut done = false;
    std::iter::from_fn(move || {
        if done {
            return None;
        }
        let break_before = pending_break;
        match breaks.next() {
            Some(m) => {
                let body = &document[cursor..m.start()];
                cursor = m.end();
                pending_break = m.as_str();
                Some((break_before, body))
            }
            None => {
                done = true;
                Some((break_before, &document[cursor..]))
            }
        }
    })
}
