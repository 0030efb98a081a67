//! Terminal rendering adapter: transformed document to ratatui lines.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::bionic::TransformedDocument;

use super::constants::ACCENT;

/// A run of text sharing one style.
type Piece<'a> = (&'a str, Style);

fn bold_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Map paragraphs to styled lines, with an empty line between paragraphs.
///
/// Newlines inside a paragraph (single line breaks) start a new line.
fn logical_lines<'a>(doc: &TransformedDocument<'a>) -> Vec<Vec<Piece<'a>>> {
    let mut lines = Vec::new();
    for (i, paragraph) in doc.paragraphs.iter().enumerate() {
        if i > 0 {
            lines.push(Vec::new());
        }
        let mut current: Vec<Piece<'a>> = Vec::new();
        for span in paragraph.spans() {
            let Some(span) = span else {
                current.push((" ", Style::default()));
                continue;
            };
            let style = if span.is_bold() {
                bold_style()
            } else {
                Style::default()
            };
            for (j, part) in span.text.split('\n').enumerate() {
                if j > 0 {
                    lines.push(std::mem::take(&mut current));
                }
                if !part.is_empty() {
                    current.push((part, style));
                }
            }
        }
        lines.push(current);
    }
    lines
}

/// Screen rows for `doc`, word-wrapped to `width` columns.
///
/// Every returned line fits in `width`, so the row count is the drawn height.
pub(crate) fn document_lines<'a>(doc: &TransformedDocument<'a>, width: u16) -> Vec<Line<'a>> {
    logical_lines(doc)
        .iter()
        .flat_map(|pieces| wrap_pieces(pieces, usize::from(width)))
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(text, style)| Span::styled(text, style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

/// A run of non-space text and the spaces after it.
#[derive(Default)]
struct Word<'a> {
    body: Vec<Piece<'a>>,
    body_width: usize,
    gap: Vec<Piece<'a>>,
    gap_width: usize,
}

fn split_words<'a>(pieces: &[Piece<'a>]) -> Vec<Word<'a>> {
    let mut words = Vec::new();
    let mut current = Word::default();
    for &(text, style) in pieces {
        let mut rest = text;
        while let Some(first) = rest.chars().next() {
            let is_gap = first == ' ';
            let end = rest
                .find(|c: char| (c == ' ') != is_gap)
                .unwrap_or(rest.len());
            let (run, tail) = rest.split_at(end);
            rest = tail;
            let width = textwrap::core::display_width(run);
            if is_gap {
                current.gap.push((run, style));
                current.gap_width += width;
            } else {
                if !current.gap.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
                current.body.push((run, style));
                current.body_width += width;
            }
        }
    }
    words.push(current);
    words
}

fn char_width(c: char) -> usize {
    let mut buf = [0; 4];
    textwrap::core::display_width(c.encode_utf8(&mut buf))
}

/// Greedy word wrap that keeps span styles.
///
/// Breaks at spaces and drops the spaces at a break. Words wider than a row
/// are split between characters. A row holds at least one character.
fn wrap_pieces<'a>(pieces: &[Piece<'a>], width: usize) -> Vec<Vec<Piece<'a>>> {
    if width == 0 {
        return vec![pieces.to_vec()];
    }
    let mut rows = Vec::new();
    let mut row: Vec<Piece<'a>> = Vec::new();
    let mut row_width = 0;
    let mut pending: Vec<Piece<'a>> = Vec::new();
    let mut pending_width = 0;

    for word in split_words(pieces) {
        if row_width + pending_width + word.body_width <= width {
            row.append(&mut pending);
            row.extend(word.body);
            row_width += pending_width + word.body_width;
        } else {
            if !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            for (text, style) in word.body {
                let mut start = 0;
                for (i, c) in text.char_indices() {
                    let w = char_width(c);
                    if row_width > 0 && row_width + w > width {
                        if i > start {
                            row.push((&text[start..i], style));
                        }
                        rows.push(std::mem::take(&mut row));
                        row_width = 0;
                        start = i;
                    }
                    row_width += w;
                }
                if start < text.len() {
                    row.push((&text[start..], style));
                }
            }
        }
        pending = word.gap;
        pending_width = word.gap_width;
    }
    rows.push(row);
    rows
}

#[cfg(test)]
mod tests {
    use ratatui::style::Modifier;

    use super::document_lines;
    use crate::core::bionic::transform_with;

    fn line_text(line: &ratatui::text::Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn texts(input: &str, width: u16) -> Vec<String> {
        let doc = transform_with(input, 0.4);
        document_lines(&doc, width).iter().map(line_text).collect()
    }

    #[test]
    fn paragraphs_are_separated_by_empty_line() {
        assert_eq!(texts("one two\n\nthree", 80), ["one two", "", "three"]);
    }

    #[test]
    fn bold_prefix_has_bold_modifier() {
        let doc = transform_with("hello", 0.4);
        let lines = document_lines(&doc, 80);
        let spans = &lines[0].spans;
        assert_eq!(spans[0].content.as_ref(), "he");
        assert!(spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(spans[1].content.as_ref(), "llo");
        assert!(!spans[1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn single_newline_breaks_terminal_line() {
        assert_eq!(texts("roses\nviolets", 80), ["roses", "violets"]);
    }

    #[test]
    fn wraps_at_spaces() {
        assert_eq!(texts("aaa bbb ccc\n\nd", 80), ["aaa bbb ccc", "", "d"]);
        assert_eq!(texts("aaa bbb ccc\n\nd", 7), ["aaa bbb", "ccc", "", "d"]);
    }

    #[test]
    fn runs_of_spaces_are_dropped_at_breaks() {
        assert_eq!(
            texts("x  yy   zzz    wwww     vvvvv", 6),
            ["x  yy", "zzz", "wwww", "vvvvv"]
        );
    }

    #[test]
    fn long_words_split_between_characters() {
        assert_eq!(texts("abcdefghij", 4), ["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wide_characters_count_two_columns() {
        assert_eq!(
            texts("日本語の文章 日本語の文章", 8),
            ["日本語の", "文章", "日本語の", "文章"]
        );
    }

    #[test]
    fn split_word_keeps_bold_prefix_style() {
        let doc = transform_with("abcdefghij", 0.4);
        let lines = document_lines(&doc, 3);
        assert_eq!(line_text(&lines[0]), "abc");
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(lines[1].spans[0].content.as_ref(), "d");
        assert!(lines[1].spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(lines[1].spans[1].content.as_ref(), "ef");
        assert!(!lines[1].spans[1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn every_row_fits_the_width() {
        let doc = transform_with("a bb ccc dddd eeeee ffffff 日本語の文章 x", 0.4);
        for width in 1..12u16 {
            for line in document_lines(&doc, width) {
                assert!(line.width() <= usize::from(width).max(2), "{:?}", line);
            }
        }
    }
}
