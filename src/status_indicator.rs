use crate::constants::SPINNER_FRAMES;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// The ingestion status line: a spinner while a request is in flight, then
/// the last status message colored by outcome.
#[derive(Debug)]
pub struct StatusIndicator<'a> {
    busy: bool,
    status: Option<&'a str>,
    spinner_idx: usize,
}

impl<'a> StatusIndicator<'a> {
    pub fn new(busy: bool, status: Option<&'a str>, spinner_idx: usize) -> Self {
        Self {
            busy,
            status,
            spinner_idx,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let spinner = if self.busy {
            SPINNER_FRAMES[self.spinner_idx % SPINNER_FRAMES.len()]
        } else {
            " "
        };

        let status_text = if self.busy {
            "Ingesting…"
        } else {
            self.status.unwrap_or("")
        };

        // Success and error are told apart by prefix, matching how the
        // status string is built.
        let status_color = if status_text.starts_with("Error") {
            Color::Red
        } else if self.busy {
            Color::DarkGray
        } else {
            Color::Green
        };

        let line = Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::Gray)),
            Span::raw(" "),
            Span::styled(status_text, Style::default().fg(status_color)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
