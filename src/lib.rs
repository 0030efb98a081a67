//! Bionic reading engine and output adapters.
//!
//! [`core::bionic::transform`] turns text into paragraphs of bold/normal spans;
//! [`core::render`] maps that structure onto plain text, ANSI, HTML, Markdown or JSON.
//! The `bionic-reader` binary adds a CLI and an interactive terminal UI on top.

pub mod core;
