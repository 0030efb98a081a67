//! Reading view: the converted text with bold prefixes.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::super::app::App;
use super::super::text::document_lines;

pub(crate) fn draw_reading(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);

    let (scroll, max_scroll) = {
        let Some(doc) = app.document() else {
            return;
        };
        let title = format!(" {} words ", doc.word_count());
        // Lines are wrapped here, so each one is exactly one drawn row
        let lines = document_lines(&doc, inner.width);
        let max_scroll = lines.len().saturating_sub(usize::from(inner.height));
        let scroll = app.scroll.min(max_scroll);

        let para = Paragraph::new(lines)
            .block(block.title(title))
            .scroll((scroll as u16, 0));
        f.render_widget(para, area);
        (scroll, max_scroll)
    };

    app.last_max_scroll = max_scroll;
    app.scroll = scroll;
}
