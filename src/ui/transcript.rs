use crate::app::{App, Focus};
use crate::constants::{EMPTY_TRANSCRIPT_HINT, SPINNER_FRAMES, THINKING_LABEL};
use crate::models::{Message, Role};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

/// The conversation panel: every transcript entry in order, oldest first,
/// plus a pending indicator while a query is in flight.
pub fn draw_messages(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Chat ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();

    if app.chat.transcript.is_empty() {
        lines.push(Line::from(Span::styled(
            EMPTY_TRANSCRIPT_HINT,
            Style::default().fg(Color::DarkGray),
        )));
    }

    for message in &app.chat.transcript {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(message_lines(message, inner));
    }

    if app.chat.query_busy {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        let spinner = SPINNER_FRAMES[app.spinner_idx % SPINNER_FRAMES.len()];
        lines.push(Line::from(Span::styled(
            format!("{} {}", spinner, THINKING_LABEL),
            Style::default().fg(Color::DarkGray),
        )));
    }

    // Clamp scroll so the view never runs past the last line.
    let total_lines = lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(inner.height);
    let scroll = app.scroll.min(max_scroll);

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(paragraph.scroll((scroll, 0)), inner);
}

/// Renders one message: a role header, the content with line breaks
/// preserved, and a citation row when sources are present.
fn message_lines(message: &Message, area: Rect) -> Vec<Line<'static>> {
    let (label, label_color) = match message.role {
        Role::User => ("You", Color::Rgb(255, 223, 128)),
        Role::Assistant => ("Assistant", Color::Rgb(144, 238, 144)),
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            label.to_string(),
            Style::default()
                .fg(label_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" · {}", message.timestamp.format("%H:%M")),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        ),
    ])];

    let wrap_width = (area.width as usize).saturating_sub(2).max(1);
    for content_line in message.content.lines() {
        if content_line.is_empty() {
            lines.push(Line::from(""));
            continue;
        }
        for wrapped in wrap(content_line, wrap_width) {
            lines.push(Line::from(Span::styled(
                wrapped.to_string(),
                Style::default().fg(Color::White),
            )));
        }
    }

    if !message.sources.is_empty() {
        let mut spans = vec![Span::styled(
            "Sources: ".to_string(),
            Style::default().fg(Color::DarkGray),
        )];
        for (idx, source) in message.sources.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                source.label.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines
}

/// The question row. Enter sends; the buffer scrolls horizontally when the
/// text outgrows the row.
pub fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let separator = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    let focused = app.focus == Focus::Question;
    let prefix_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let input = Line::from(vec![
        Span::styled("→ ", prefix_style),
        Span::styled(
            app.chat.question_input.as_str(),
            Style::default().fg(Color::White),
        ),
    ]);

    let visible_width = area.width.saturating_sub(2);
    let text_width = app.chat.question_input.width() as u16;
    let scroll_offset = text_width.saturating_sub(visible_width);

    let input_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: 1,
    };
    f.render_widget(Paragraph::new(input).scroll((0, scroll_offset)), input_area);

    if focused {
        let x = input_area.x + 2 + text_width.saturating_sub(scroll_offset);
        f.set_cursor(x.min(input_area.x + input_area.width.saturating_sub(1)), input_area.y);
    }

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Enter to send · Tab to switch panes · Esc to quit",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        ))),
        Rect {
            x: area.x,
            y: area.y + 2,
            width: area.width,
            height: 1,
        },
    );
}
