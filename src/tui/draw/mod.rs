//! TUI rendering: layout and widgets for the reader.

mod header;
mod input;
mod popups;
mod reading;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::widgets::Paragraph;
use std::time::Instant;

use super::app::{App, View};
use super::shortcuts::labels;

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    header::draw_header(f, app, chunks[0]);
    match app.view {
        View::Input => input::draw_input(f, app, chunks[1]),
        View::Reading => reading::draw_reading(f, app, chunks[1]),
    }
    f.render_widget(
        Paragraph::new(labels::bottom_bar(app.view, app.settings_open))
            .alignment(Alignment::Right),
        chunks[2],
    );

    if app.settings_open {
        popups::draw_settings_popup(f, area, app);
    }

    if let Some(deadline) = app.copy_toast_until {
        if deadline > Instant::now() {
            popups::draw_copy_toast(f, area);
        } else {
            app.copy_toast_until = None;
        }
    }
}
