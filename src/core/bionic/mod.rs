//! Bionic reading transformation: emphasize the leading part of every word.
//!
//! The engine is a pure function of its inputs. [`transform`] splits the document
//! into paragraphs on blank lines, each paragraph into words on literal spaces, and
//! each word into a bold prefix and a normal remainder. The result borrows from the
//! input and is handed to a renderer (see [`crate::core::render`]) for display.
//!
//! ```text
//! "Hi, there!" @ 0.5  ->  [H]i, [the]re!
//! ```

mod fraction;
mod paragraph;
mod word;

pub use fraction::{BoldFraction, bold_length};
pub use paragraph::split_paragraphs;
pub use word::{split_word, transform_word};

use serde::Serialize;

/// Visual weight of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Bold,
    Normal,
}

/// A run of text with a single emphasis. Borrows from the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span<'a> {
    pub text: &'a str,
    pub emphasis: Emphasis,
}

impl Span<'_> {
    pub fn is_bold(&self) -> bool {
        self.emphasis == Emphasis::Bold
    }
}

/// One space-delimited token: either `[bold, normal]` or a single normal span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word<'a> {
    pub spans: Vec<Span<'a>>,
}

impl<'a> Word<'a> {
    /// Bold prefix, if the token has a stem.
    pub fn bold(&self) -> Option<&'a str> {
        self.spans.iter().find(|s| s.is_bold()).map(|s| s.text)
    }

    /// Everything after the bold prefix (the whole token when there is no stem).
    pub fn normal(&self) -> &'a str {
        self.spans
            .iter()
            .find(|s| !s.is_bold())
            .map_or("", |s| s.text)
    }

    /// Original token text.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text).collect()
    }
}

/// Words of one paragraph, in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph<'a> {
    /// Blank-line text this paragraph was split on (empty for the first one).
    #[serde(skip_serializing_if = "str::is_empty")]
    pub break_before: &'a str,
    pub words: Vec<Word<'a>>,
}

impl<'a> Paragraph<'a> {
    /// Spans in order, with `None` marking the implicit separator between words.
    pub fn spans(&self) -> impl Iterator<Item = Option<Span<'a>>> + '_ {
        self.words.iter().enumerate().flat_map(|(i, word)| {
            let separator = (i > 0).then_some(None);
            separator
                .into_iter()
                .chain(word.spans.iter().copied().map(Some))
        })
    }

    /// Paragraph text with words joined by single spaces.
    pub fn to_plain_text(&self) -> String {
        self.words
            .iter()
            .map(Word::text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Output of [`transform`]: paragraphs of styled spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformedDocument<'a> {
    pub paragraphs: Vec<Paragraph<'a>>,
}

impl TransformedDocument<'_> {
    /// Number of non-empty words.
    pub fn word_count(&self) -> usize {
        self.paragraphs
            .iter()
            .flat_map(|p| &p.words)
            .filter(|w| w.spans.iter().any(|s| !s.text.is_empty()))
            .count()
    }

    /// Reconstruct the source text, keeping the original blank-line breaks.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for paragraph in &self.paragraphs {
            out.push_str(paragraph.break_before);
            out.push_str(&paragraph.to_plain_text());
        }
        out
    }
}

/// Transform `document` into bionic reading form.
///
/// Total over its inputs: any string, any fraction (clamped by [`BoldFraction`]).
pub fn transform(document: &str, fraction: BoldFraction) -> TransformedDocument<'_> {
    let paragraphs = split_paragraphs(document)
        .map(|(break_before, body)| Paragraph {
            break_before,
            words: body
                .split(' ')
                .map(|token| transform_word(token, fraction))
                .collect(),
        })
        .collect();
    TransformedDocument { paragraphs }
}

/// [`transform`] with a raw fraction value.
pub fn transform_with(document: &str, fraction: f64) -> TransformedDocument<'_> {
    transform(document, BoldFraction::new(fraction))
}

#[cfg(test)]
mod tests;
