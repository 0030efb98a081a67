//! Rendering adapters: map a [`TransformedDocument`] onto an output format.
//!
//! The engine emits a neutral structure; each renderer here turns it into text for a
//! specific target. The TUI has its own adapter producing ratatui spans.

mod ansi;
mod html;
mod markdown;

pub use ansi::Ansi;
pub use html::Html;
pub use markdown::Markdown;

use std::fmt;
use std::str::FromStr;

use crate::core::bionic::TransformedDocument;

/// A swappable output adapter.
pub trait Render {
    fn render(&self, doc: &TransformedDocument<'_>) -> String;
}

/// Reconstructed text without any emphasis markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Render for Plain {
    fn render(&self, doc: &TransformedDocument<'_>) -> String {
        doc.to_plain_text()
    }
}

/// JSON dump of the paragraph/word/span structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl Render for Json {
    fn render(&self, doc: &TransformedDocument<'_>) -> String {
        // Only strings and enums: serialization cannot fail.
        serde_json::to_string_pretty(doc).unwrap_or_default()
    }
}

/// Output formats selectable from the CLI and environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    #[default]
    Ansi,
    Html,
    Markdown,
    Json,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown output format '{0}' (expected plain, ansi, html, markdown or json)")]
pub struct UnknownFormat(pub String);

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Render> {
        match self {
            OutputFormat::Plain => Box::new(Plain),
            OutputFormat::Ansi => Box::new(Ansi),
            OutputFormat::Html => Box::new(Html),
            OutputFormat::Markdown => Box::new(Markdown),
            OutputFormat::Json => Box::new(Json),
        }
    }

    /// Formats that are line-oriented text and can be wrapped to a width.
    pub fn supports_wrapping(self) -> bool {
        matches!(
            self,
            OutputFormat::Plain | OutputFormat::Ansi | OutputFormat::Markdown
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Ansi => "ansi",
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "ansi" | "terminal" => Ok(OutputFormat::Ansi),
            "html" => Ok(OutputFormat::Html),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

/// Render `doc` in `format`, wrapping lines to `width` columns when requested.
pub fn render(doc: &TransformedDocument<'_>, format: OutputFormat, width: Option<usize>) -> String {
    let out = format.renderer().render(doc);
    match width {
        Some(w) if w > 0 && format.supports_wrapping() => wrap_lines(&out, w),
        _ => out,
    }
}

/// Wrap each line to `width` columns. textwrap skips ANSI escapes when measuring.
fn wrap_lines(s: &str, width: usize) -> String {
    s.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                textwrap::wrap(line, width).join("\n")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
