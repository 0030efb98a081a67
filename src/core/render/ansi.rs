//! ANSI terminal output: bold prefixes via SGR escape sequences.

use std::fmt::Write;

use crossterm::style::Stylize;

use crate::core::bionic::TransformedDocument;

use super::Render;

#[derive(Debug, Clone, Copy, Default)]
pub struct Ansi;

impl Render for Ansi {
    fn render(&self, doc: &TransformedDocument<'_>) -> String {
        let mut out = String::new();
        for paragraph in &doc.paragraphs {
            out.push_str(paragraph.break_before);
            for span in paragraph.spans() {
                match span {
                    None => out.push(' '),
                    Some(s) if s.is_bold() => {
                        let _ = write!(out, "{}", s.text.bold());
                    }
                    Some(s) => out.push_str(s.text),
                }
            }
        }
        out
    }
}
