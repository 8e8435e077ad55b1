use crate::app::{App, Focus};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// The URL textarea. Paste one or more URLs, space or line separated.
pub fn draw_url_box(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Urls;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let box_widget = Paragraph::new(app.chat.url_input.as_str())
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Ingest URLs (Ctrl+S) ")
                .border_style(border_style),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(box_widget, area);

    if focused {
        let last_line = app.chat.url_input.rsplit('\n').next().unwrap_or("");
        let line_count = app.chat.url_input.matches('\n').count() as u16;
        let x = area.x + 1 + last_line.width() as u16;
        let y = area.y + 1 + line_count.min(area.height.saturating_sub(3));
        f.set_cursor(x.min(area.x + area.width.saturating_sub(2)), y);
    }
}

/// The active-source list: one row per ingested URL in first-insertion
/// order, plus the clear-filter hint.
pub fn draw_sources(f: &mut Frame, app: &App, area: Rect) {
    if app.chat.indexed_sources.is_empty() || area.height == 0 {
        return;
    }

    let mut lines = vec![Line::from(Span::styled(
        "Active sources:",
        Style::default().fg(Color::DarkGray),
    ))];

    for (idx, source) in app.chat.indexed_sources.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("[{}] {}", idx + 1, source),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        )));
    }

    lines.push(Line::from(Span::styled(
        "Ctrl+X clears the sources filter",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    )));

    f.render_widget(Paragraph::new(lines), area);
}
