//! Input view: source text editor and validation message.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::super::app::App;
use super::super::constants::{ACCENT, ERROR};

pub(crate) fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    let input_area = chunks[0];

    let border_style = if app.settings_open {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(ACCENT)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Text ");
    let inner = block.inner(input_area);

    let content: Vec<Line<'_>> = if app.input.is_empty() {
        vec![Line::from(Span::styled(
            "Paste or type the text to convert...",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        app.input.split('\n').map(Line::raw).collect()
    };

    // Keep the cursor visible: scroll vertically and horizontally as needed.
    let (cursor_line, cursor_col) = app.cursor_line_col();
    let scroll_y = cursor_line.saturating_sub(usize::from(inner.height).saturating_sub(1));
    let scroll_x = cursor_col.saturating_sub(usize::from(inner.width).saturating_sub(1));
    let para = Paragraph::new(content)
        .block(block)
        .style(Style::default().fg(Color::White))
        .scroll((scroll_y as u16, scroll_x as u16));
    f.render_widget(para, input_area);

    if !app.settings_open {
        f.set_cursor_position(Position::new(
            inner.x + (cursor_col - scroll_x) as u16,
            inner.y + (cursor_line - scroll_y) as u16,
        ));
    }

    if let Some(ref err) = app.error {
        f.render_widget(
            Paragraph::new(Span::styled(err.as_str(), Style::default().fg(ERROR))),
            chunks[1],
        );
    }
}
