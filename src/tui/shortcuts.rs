//! Centralized keyboard shortcuts.
//!
//! Complete reference:
//!
//! | Action        | Keys                     |
//! |---------------|--------------------------|
//! | Convert       | Ctrl+R, F5               |
//! | Edit text     | Ctrl+E, Esc (reading)    |
//! | Settings      | Ctrl+O                   |
//! | Copy as HTML  | Ctrl+Y                   |
//! | Clear input   | Ctrl+L                   |
//! | Scroll        | ↑ ↓ PageUp PageDown      |
//! | Quit          | Ctrl+C                   |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Detected shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Convert the input and show the reading view (Ctrl+R, F5)
    Convert,
    /// Return to editing (Ctrl+E)
    Edit,
    /// Open or close the settings panel (Ctrl+O)
    Settings,
    /// Copy the HTML rendering to the clipboard (Ctrl+Y)
    Copy,
    /// Clear the input (Ctrl+L)
    Clear,
    /// Quit (Ctrl+C)
    Quit,
}

impl Shortcut {
    /// Returns the shortcut if the key matches.
    pub fn match_key(key: &KeyEvent) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.code == KeyCode::F(5) {
            return Some(Shortcut::Convert);
        }
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }
        match key.code {
            KeyCode::Char('c') => Some(Shortcut::Quit),
            KeyCode::Char('r') => Some(Shortcut::Convert),
            KeyCode::Char('e') => Some(Shortcut::Edit),
            KeyCode::Char('o') => Some(Shortcut::Settings),
            KeyCode::Char('y') => Some(Shortcut::Copy),
            KeyCode::Char('l') => Some(Shortcut::Clear),
            _ => None,
        }
    }
}

/// Label helpers for the bottom bar.
pub mod labels {
    use ratatui::style::{Color, Style};
    use ratatui::text::{Line, Span};

    use super::super::app::View;
    use super::super::constants::ACCENT;

    fn hint(keys: &'static str, action: &'static str) -> [Span<'static>; 2] {
        [
            Span::styled(keys, Style::default().fg(ACCENT)),
            Span::styled(action, Style::default().fg(Color::DarkGray)),
        ]
    }

    /// Shortcut hints for the current view.
    pub fn bottom_bar(view: View, settings_open: bool) -> Line<'static> {
        let hints: &[(&'static str, &'static str)] = if settings_open {
            &[("← →", " adjust  "), ("Esc", " close  "), ("^C", " quit ")]
        } else {
            match view {
                View::Input => &[
                    ("^R", " convert  "),
                    ("^O", " settings  "),
                    ("^L", " clear  "),
                    ("^C", " quit "),
                ],
                View::Reading => &[
                    ("↑↓", " scroll  "),
                    ("^E", " edit  "),
                    ("^O", " settings  "),
                    ("^Y", " copy html  "),
                    ("^C", " quit "),
                ],
            }
        };
        Line::from(
            hints
                .iter()
                .flat_map(|&(keys, action)| hint(keys, action))
                .collect::<Vec<_>>(),
        )
    }
}
