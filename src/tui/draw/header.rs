//! Header: logo, title, current view, bold fraction.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::app;

use super::super::app::{App, View};
use super::super::constants::{ACCENT, LOGO};

/// Width for the fraction display (e.g. "bold 40%").
const FRACTION_HEADER_WIDTH: u16 = 12;

pub(crate) fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(FRACTION_HEADER_WIDTH),
        ])
        .split(area);

    let view_label = match app.view {
        View::Input => "edit",
        View::Reading => "read",
    };
    let title = Line::from(vec![
        Span::styled(format!("{} ", LOGO), Style::default().fg(ACCENT)),
        Span::styled(
            app::NAME,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", view_label), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(title), chunks[0]);

    let fraction = Line::from(vec![
        Span::styled("bold ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}%", app.fraction.percent()),
            Style::default().fg(ACCENT),
        ),
    ]);
    f.render_widget(
        Paragraph::new(fraction).alignment(ratatui::layout::Alignment::Right),
        chunks[1],
    );
}
