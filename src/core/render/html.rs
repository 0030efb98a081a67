//! HTML output: one `<p>` per paragraph, `<b>` for emphasized prefixes.

use crate::core::bionic::TransformedDocument;

use super::Render;

#[derive(Debug, Clone, Copy, Default)]
pub struct Html;

/// Escape text for HTML element content.
pub(super) fn escape(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}

impl Render for Html {
    fn render(&self, doc: &TransformedDocument<'_>) -> String {
        let mut out = String::new();
        for (i, paragraph) in doc.paragraphs.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str("<p>");
            for span in paragraph.spans() {
                match span {
                    None => out.push(' '),
                    Some(s) if s.is_bold() => {
                        out.push_str("<b>");
                        escape(s.text, &mut out);
                        out.push_str("</b>");
                    }
                    Some(s) => escape(s.text, &mut out),
                }
            }
            out.push_str("</p>");
        }
        out
    }
}
