pub mod ingest;
pub mod transcript;

use crate::app::App;
use crate::status_indicator::StatusIndicator;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Draws the whole widget. Rendering is a pure function of `App`; nothing
/// here mutates state.
pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    let sources_height = if app.chat.indexed_sources.is_empty() {
        0
    } else {
        app.chat.indexed_sources.len() as u16 + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(5),              // URL textarea
                Constraint::Length(1),              // ingest status
                Constraint::Length(sources_height), // active sources
                Constraint::Min(1),                 // transcript
                Constraint::Length(3),              // question input
            ]
            .as_ref(),
        )
        .split(size);

    ingest::draw_url_box(f, app, chunks[0]);

    StatusIndicator::new(
        app.chat.ingest_busy,
        app.chat.ingest_status.as_deref(),
        app.spinner_idx,
    )
    .render(f, chunks[1]);

    ingest::draw_sources(f, app, chunks[2]);
    transcript::draw_messages(f, app, chunks[3]);
    transcript::draw_input(f, app, chunks[4]);
}
