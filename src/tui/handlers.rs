//! Event handlers for the TUI: keyboard.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, View};
use super::constants;
use super::shortcuts::Shortcut;

/// Result of handling an event: continue the loop or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Handle a key event.
pub fn handle_key(key: KeyEvent, app: &mut App) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }
    if let Some(shortcut) = Shortcut::match_key(&key) {
        return handle_shortcut(shortcut, app);
    }
    if app.settings_open {
        handle_settings(key.code, app);
        return HandleResult::Continue;
    }
    match app.view {
        View::Input => handle_input(key.code, key.modifiers, app),
        View::Reading => handle_reading(key.code, app),
    }
    HandleResult::Continue
}

fn handle_shortcut(shortcut: Shortcut, app: &mut App) -> HandleResult {
    match shortcut {
        Shortcut::Quit => return HandleResult::Break,
        Shortcut::Settings => app.toggle_settings(),
        Shortcut::Convert => {
            if app.convert() {
                log::debug!("Converted {} bytes at fraction {}", app.input.len(), app.fraction);
            }
        }
        Shortcut::Edit => app.back_to_input(),
        Shortcut::Clear => {
            if app.view == View::Input {
                app.clear_input();
            }
        }
        Shortcut::Copy => copy_html(app),
    }
    HandleResult::Continue
}

/// Copy the HTML rendering to the system clipboard.
fn copy_html(app: &mut App) {
    let Some(html) = app.html_output() else {
        return;
    };
    match arboard::Clipboard::new().and_then(|mut c| c.set_text(html)) {
        Ok(()) => {
            app.copy_toast_until =
                Some(Instant::now() + Duration::from_millis(constants::COPY_TOAST_MS));
        }
        Err(e) => log::warn!("Clipboard copy failed: {}", e),
    }
}

/// Settings panel: adjust the bold fraction.
fn handle_settings(code: KeyCode, app: &mut App) {
    match code {
        KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => app.decrease_fraction(),
        KeyCode::Right | KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => {
            app.increase_fraction()
        }
        KeyCode::Esc | KeyCode::Enter => app.settings_open = false,
        _ => {}
    }
}

/// Text editing in the input view.
fn handle_input(code: KeyCode, modifiers: KeyModifiers, app: &mut App) {
    match code {
        KeyCode::Enter => app.insert_newline(),
        KeyCode::Tab => app.insert_char('\t'),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.delete(),
        KeyCode::Left => app.cursor_left(),
        KeyCode::Right => app.cursor_right(),
        KeyCode::Home => app.cursor_home(),
        KeyCode::End => app.cursor_end(),
        // Ignore Ctrl/Alt+key: user likely intended a shortcut
        KeyCode::Char(c)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.insert_char(c)
        }
        _ => {}
    }
}

/// Scrolling in the reading view.
fn handle_reading(code: KeyCode, app: &mut App) {
    match code {
        KeyCode::Up => app.scroll_up(constants::SCROLL_LINES_SMALL),
        KeyCode::Down => app.scroll_down(constants::SCROLL_LINES_SMALL),
        KeyCode::PageUp => app.scroll_up(constants::SCROLL_LINES_PAGE),
        KeyCode::PageDown => app.scroll_down(constants::SCROLL_LINES_PAGE),
        KeyCode::Home => app.scroll = 0,
        KeyCode::Esc => app.back_to_input(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::{HandleResult, handle_key};
    use crate::core::bionic::BoldFraction;
    use crate::core::persistence::load_fraction_from;
    use crate::tui::app::{App, View};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn press(app: &mut App, code: KeyCode) -> HandleResult {
        handle_key(key(code, KeyModifiers::empty()), app)
    }

    fn ctrl(app: &mut App, c: char) -> HandleResult {
        handle_key(key(KeyCode::Char(c), KeyModifiers::CONTROL), app)
    }

    #[test]
    fn typing_then_convert_shows_reading_view() {
        let mut app = App::new(BoldFraction::DEFAULT);
        for c in "hi there".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input, "hi there");
        ctrl(&mut app, 'r');
        assert_eq!(app.view, View::Reading);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view, View::Input);
    }

    #[test]
    fn convert_blank_sets_error() {
        let mut app = App::new(BoldFraction::DEFAULT);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::F(5));
        assert_eq!(app.view, View::Input);
        assert!(app.error.is_some());
    }

    #[test]
    fn settings_panel_adjusts_fraction() {
        let mut app = App::new(BoldFraction::DEFAULT);
        ctrl(&mut app, 'o');
        assert!(app.settings_open);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.fraction.percent(), 45);
        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.fraction.percent(), 35);
        // Typing does not reach the input while the panel is open
        press(&mut app, KeyCode::Char('x'));
        assert!(app.input.is_empty());
        press(&mut app, KeyCode::Esc);
        assert!(!app.settings_open);
    }

    #[test]
    fn settings_change_is_saved_before_quit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bold_fraction");
        let mut app = App::new(BoldFraction::DEFAULT).saving_to(Some(path.clone()));
        ctrl(&mut app, 'o');
        press(&mut app, KeyCode::Right);
        assert_eq!(load_fraction_from(&path), Some(BoldFraction::new(0.45)));
    }

    #[test]
    fn quit_breaks_loop() {
        let mut app = App::new(BoldFraction::DEFAULT);
        assert_eq!(ctrl(&mut app, 'c'), HandleResult::Break);
    }

    #[test]
    fn clear_only_in_input_view() {
        let mut app = App::new(BoldFraction::DEFAULT);
        press(&mut app, KeyCode::Char('a'));
        ctrl(&mut app, 'r');
        ctrl(&mut app, 'l');
        assert_eq!(app.input, "a");
        ctrl(&mut app, 'e');
        ctrl(&mut app, 'l');
        assert!(app.input.is_empty());
    }
}
