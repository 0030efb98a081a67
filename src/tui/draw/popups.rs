//! Popups: settings panel, copy toast.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::core::bionic::{self, BoldFraction};

use super::super::app::App;
use super::super::constants::{ACCENT, PREVIEW_TEXT};
use super::super::text::document_lines;

fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);
    let vertical_areas = vertical.split(area);
    let horizontal_areas = horizontal.split(vertical_areas[0]);
    horizontal_areas[0]
}

/// Slider cells from UI_MIN to UI_MAX, one per 0.05 step.
fn slider(fraction: BoldFraction) -> Line<'static> {
    let min = BoldFraction::UI_MIN.percent();
    let max = BoldFraction::UI_MAX.percent();
    let current = fraction.percent();
    let mut spans = vec![Span::styled("◀ ", Style::default().fg(Color::DarkGray))];
    for p in (min..=max).step_by(usize::from(BoldFraction::UI_STEP.percent())) {
        let (cell, style) = if p <= current {
            ("■", Style::default().fg(ACCENT))
        } else {
            ("□", Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(cell, style));
    }
    spans.push(Span::styled(" ▶", Style::default().fg(Color::DarkGray)));
    Line::from(spans)
}

pub(crate) fn draw_settings_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_rect = popup_area(area, 52, 9);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" Settings ");

    let preview = bionic::transform(PREVIEW_TEXT, app.fraction);
    let inner_width = popup_rect.width.saturating_sub(2);
    let mut text = vec![
        Line::from(vec![
            Span::raw("Bold fraction: "),
            Span::styled(app.fraction.to_string(), Style::default().fg(ACCENT)),
        ]),
        slider(app.fraction),
        Line::from(""),
    ];
    text.extend(document_lines(&preview, inner_width));
    text.push(Line::from(""));
    text.push(Line::from(vec![
        Span::styled("← → ", Style::default().fg(ACCENT)),
        Span::raw("adjust  "),
        Span::styled("Esc ", Style::default().fg(Color::DarkGray)),
        Span::raw("close"),
    ]));

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(Clear, popup_rect);
    f.render_widget(paragraph, popup_rect);
}

/// Toast: top right, below header. Opaque background so it's visible over the text.
pub(crate) fn draw_copy_toast(f: &mut Frame, area: Rect) {
    const HEADER_HEIGHT: u16 = 2;
    let toast_text = " Copied HTML ";
    let toast_width = toast_text.len() as u16 + 2;
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(toast_width).saturating_sub(1),
        y: area.y + HEADER_HEIGHT,
        width: toast_width.min(area.width),
        height: 3u16.min(area.height.saturating_sub(HEADER_HEIGHT)),
    };
    f.render_widget(Clear, toast_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .style(Style::default().bg(Color::Black));
    let para = Paragraph::new(Line::from(toast_text))
        .block(block)
        .style(Style::default().fg(ACCENT).bg(Color::Black));
    f.render_widget(para, toast_area);
}
