//! TUI application state: input text, bold fraction, settings panel, view, scroll.

use std::path::PathBuf;
use std::time::Instant;

use crate::core::bionic::{self, BoldFraction, TransformedDocument};
use crate::core::persistence;
use crate::core::render::{Html, Render};

/// Message shown when converting blank input.
pub(crate) const BLANK_INPUT_ERROR: &str = "Please enter some text";

/// Which main panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Editing the source text.
    Input,
    /// Reading the converted text.
    Reading,
}

pub struct App {
    /// Source text being edited.
    pub(crate) input: String,
    /// Cursor position in the input (byte index, always on a char boundary).
    pub(crate) input_cursor: usize,
    pub(crate) fraction: BoldFraction,
    /// Where fraction changes are saved; `None` keeps them in memory only.
    fraction_file: Option<PathBuf>,
    pub(crate) settings_open: bool,
    pub(crate) view: View,
    /// Validation error shown under the input.
    pub(crate) error: Option<String>,
    /// First visible line of the reading view.
    pub(crate) scroll: usize,
    /// Max scroll from last draw; used to clamp scrolling.
    pub(crate) last_max_scroll: usize,
    /// When set, show "Copied" toast until this instant.
    pub(crate) copy_toast_until: Option<Instant>,
}

impl App {
    pub fn new(fraction: BoldFraction) -> Self {
        Self {
            input: String::new(),
            input_cursor: 0,
            fraction: fraction.clamp_to_ui(),
            fraction_file: None,
            settings_open: false,
            view: View::Input,
            error: None,
            scroll: 0,
            last_max_scroll: usize::MAX,
            copy_toast_until: None,
        }
    }

    /// Save every fraction change to `path`.
    pub fn saving_to(mut self, path: Option<PathBuf>) -> Self {
        self.fraction_file = path;
        self
    }

    pub(crate) fn insert_char(&mut self, c: char) {
        self.input.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
        self.error = None;
    }

    pub(crate) fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub(crate) fn backspace(&mut self) {
        if let Some((i, _)) = self.input[..self.input_cursor].char_indices().next_back() {
            self.input.remove(i);
            self.input_cursor = i;
        }
    }

    pub(crate) fn delete(&mut self) {
        if self.input_cursor < self.input.len() {
            self.input.remove(self.input_cursor);
        }
    }

    pub(crate) fn cursor_left(&mut self) {
        if let Some((i, _)) = self.input[..self.input_cursor].char_indices().next_back() {
            self.input_cursor = i;
        }
    }

    pub(crate) fn cursor_right(&mut self) {
        if let Some(c) = self.input[self.input_cursor..].chars().next() {
            self.input_cursor += c.len_utf8();
        }
    }

    /// Move to the start of the current line.
    pub(crate) fn cursor_home(&mut self) {
        self.input_cursor = self.input[..self.input_cursor]
            .rfind('\n')
            .map_or(0, |i| i + 1);
    }

    /// Move to the end of the current line.
    pub(crate) fn cursor_end(&mut self) {
        self.input_cursor = self.input[self.input_cursor..]
            .find('\n')
            .map_or(self.input.len(), |i| self.input_cursor + i);
    }

    pub(crate) fn clear_input(&mut self) {
        self.input.clear();
        self.input_cursor = 0;
        self.error = None;
    }

    /// Line and column (in chars) of the cursor, for terminal cursor placement.
    pub(crate) fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.input[..self.input_cursor];
        let line = before.matches('\n').count();
        let col = before
            .rsplit('\n')
            .next()
            .map_or(0, |s| s.chars().count());
        (line, col)
    }

    /// Validate and switch to the reading view. Returns false on blank input.
    pub(crate) fn convert(&mut self) -> bool {
        if self.input.trim().is_empty() {
            self.error = Some(BLANK_INPUT_ERROR.to_string());
            return false;
        }
        self.error = None;
        self.view = View::Reading;
        self.scroll = 0;
        true
    }

    pub(crate) fn back_to_input(&mut self) {
        self.view = View::Input;
    }

    pub(crate) fn toggle_settings(&mut self) {
        self.settings_open = !self.settings_open;
    }

    pub(crate) fn increase_fraction(&mut self) {
        self.set_fraction(self.fraction.step_up());
    }

    pub(crate) fn decrease_fraction(&mut self) {
        self.set_fraction(self.fraction.step_down());
    }

    fn set_fraction(&mut self, fraction: BoldFraction) {
        if fraction == self.fraction {
            return;
        }
        self.fraction = fraction;
        if let Some(path) = &self.fraction_file
            && let Err(e) = persistence::save_fraction_to(path, fraction)
        {
            log::warn!("Could not save bold fraction: {}", e);
        }
    }

    /// Current document transformed with the current fraction; `None` while editing.
    ///
    /// Recomputed on every call so fraction changes apply immediately.
    pub(crate) fn document(&self) -> Option<TransformedDocument<'_>> {
        (self.view == View::Reading).then(|| bionic::transform(&self.input, self.fraction))
    }

    /// HTML rendering of the current document, for the clipboard.
    pub(crate) fn html_output(&self) -> Option<String> {
        self.document().map(|doc| Html.render(&doc))
    }

    pub(crate) fn scroll_down(&mut self, n: usize) {
        self.scroll = self.scroll.saturating_add(n).min(self.last_max_scroll);
    }

    pub(crate) fn scroll_up(&mut self, n: usize) {
        self.scroll = self.scroll.saturating_sub(n);
    }
}
