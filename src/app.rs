use crate::chat::ChatState;
use std::time::Instant;

/// Which input currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Urls,
    Question,
}

pub struct App {
    pub chat: ChatState,
    pub focus: Focus,
    pub scroll: u16,
    pub spinner_idx: usize,
    pub last_frame_update: Instant,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> App {
        App {
            chat: ChatState::default(),
            focus: Focus::Question,
            scroll: 0,
            spinner_idx: 0,
            last_frame_update: Instant::now(),
            should_quit: false,
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Urls => Focus::Question,
            Focus::Question => Focus::Urls,
        };
    }

    /// Advances the spinner while any request is in flight.
    pub fn update_spinner(&mut self) {
        if (self.chat.query_busy || self.chat.ingest_busy)
            && self.last_frame_update.elapsed() >= std::time::Duration::from_millis(80)
        {
            self.spinner_idx = self.spinner_idx.wrapping_add(1);
            self.last_frame_update = Instant::now();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
