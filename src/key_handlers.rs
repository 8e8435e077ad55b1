use crate::app::{App, Focus};
use crate::chat::Event;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Translates a key press into buffer edits and, where a trigger fires, a
/// state machine event for `update`.
pub fn handle_key(key: KeyEvent, app: &mut App) -> Option<Event> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => {
                app.should_quit = true;
                None
            }
            // The trigger is disabled while an ingest is in flight; the
            // core itself does not serialize overlapping calls.
            KeyCode::Char('s') => {
                if app.chat.ingest_busy {
                    None
                } else {
                    Some(Event::IngestSubmitted)
                }
            }
            KeyCode::Char('x') => Some(Event::SourcesCleared),
            KeyCode::Char('u') => {
                app.scroll_up();
                None
            }
            KeyCode::Char('d') => {
                app.scroll_down();
                None
            }
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            None
        }
        KeyCode::Tab => {
            app.toggle_focus();
            None
        }
        KeyCode::PageUp => {
            app.scroll_up();
            None
        }
        KeyCode::PageDown => {
            app.scroll_down();
            None
        }
        // Enter sends from the question row; in the URL box it is a line
        // break, same as pasting multi-line input.
        KeyCode::Enter => match app.focus {
            Focus::Question => Some(Event::QuerySubmitted),
            Focus::Urls => {
                app.chat.url_input.push('\n');
                None
            }
        },
        KeyCode::Backspace => {
            match app.focus {
                Focus::Question => {
                    app.chat.question_input.pop();
                }
                Focus::Urls => {
                    app.chat.url_input.pop();
                }
            }
            None
        }
        KeyCode::Char(c) => {
            match app.focus {
                Focus::Question => app.chat.question_input.push(c),
                Focus::Urls => app.chat.url_input.push(c),
            }
            None
        }
        _ => None,
    }
}
