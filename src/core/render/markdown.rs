//! Markdown output: `**bold**` prefixes, paragraphs separated by blank lines.

use crate::core::bionic::TransformedDocument;

use super::Render;

#[derive(Debug, Clone, Copy, Default)]
pub struct Markdown;

/// Characters with inline meaning in CommonMark.
const SPECIAL: &[char] = &[
    '\\', '*', '_', '`', '[', ']', '<', '>', '#', '|', '~', '!', '&',
];

/// Where the next character falls, for block markers that only count there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Position {
    #[default]
    LineStart,
    WordStart,
    /// Inside a run of digits that began a word (`1.` or `2)` list markers).
    Digits,
    Inside,
}

/// Backslash-escapes text so it renders literally.
///
/// Indentation at the start of a line is written as character references so
/// it cannot open a code block.
#[derive(Default)]
struct Escaper {
    position: Position,
}

impl Escaper {
    fn push(&mut self, s: &str, out: &mut String) {
        for c in s.chars() {
            self.push_char(c, out);
        }
    }

    fn push_char(&mut self, c: char, out: &mut String) {
        match c {
            '\n' => {
                out.push(c);
                self.position = Position::LineStart;
                return;
            }
            ' ' if self.position == Position::LineStart => {
                out.push_str("&#32;");
                return;
            }
            '\t' if self.position == Position::LineStart => {
                out.push_str("&#9;");
                return;
            }
            ' ' | '\t' => {
                out.push(c);
                self.position = Position::WordStart;
                return;
            }
            _ => {}
        }
        let marker = match self.position {
            Position::LineStart | Position::WordStart => matches!(c, '-' | '+' | '='),
            Position::Digits => matches!(c, '.' | ')'),
            Position::Inside => false,
        };
        if marker || SPECIAL.contains(&c) {
            out.push('\\');
        }
        out.push(c);
        self.position = match self.position {
            Position::LineStart | Position::WordStart | Position::Digits
                if c.is_ascii_digit() =>
            {
                Position::Digits
            }
            _ => Position::Inside,
        };
    }
}

impl Render for Markdown {
    fn render(&self, doc: &TransformedDocument<'_>) -> String {
        let mut out = String::new();
        for (i, paragraph) in doc.paragraphs.iter().enumerate() {
            if i > 0 {
                out.push_str("\n\n");
            }
            let mut escaper = Escaper::default();
            for span in paragraph.spans() {
                match span {
                    None => escaper.push_char(' ', &mut out),
                    Some(s) if s.is_bold() => {
                        out.push_str("**");
                        escaper.push(s.text, &mut out);
                        out.push_str("**");
                    }
                    Some(s) => escaper.push(s.text, &mut out),
                }
            }
        }
        out
    }
}
