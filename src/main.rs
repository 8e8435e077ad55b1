use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ragchat::{
    api::BackendClient,
    app::App,
    chat::{update, Effect, Event},
    config::{get_config, initialize_config},
    key_handlers::handle_key,
    logging::init_logging,
    models::QueryReply,
    ui,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    initialize_config()?;
    let config = get_config();
    let _logger = init_logging(&config.log_level)?;
    info!("Starting ragchat against {}", config.backend_base_url);

    let client = BackendClient::new(config.backend_base_url);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    client: BackendClient,
) -> Result<()> {
    let (effect_tx, mut effect_rx) = mpsc::unbounded_channel::<Effect>();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    // One task per request: overlapping requests proceed independently and
    // their completions apply in arrival order.
    tokio::spawn(async move {
        while let Some(effect) = effect_rx.recv().await {
            let client = client.clone();
            let event_tx = event_tx.clone();
            tokio::spawn(async move {
                let _ = event_tx.send(run_effect(&client, effect).await);
            });
        }
    });

    let mut app = App::new();

    loop {
        app.update_spinner();
        terminal.draw(|f| ui::draw(f, &app))?;

        while let Ok(completion) = event_rx.try_recv() {
            apply(&mut app, completion, &effect_tx);
        }

        if event::poll(Duration::from_millis(50))? {
            if let CEvent::Key(key) = event::read()? {
                if let Some(triggered) = handle_key(key, &mut app) {
                    apply(&mut app, triggered, &effect_tx);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Feeds one event through the pure core and forwards any emitted effects
/// to the dispatcher.
fn apply(app: &mut App, event: Event, effect_tx: &mpsc::UnboundedSender<Effect>) {
    let before = app.chat.transcript.len();
    let state = std::mem::take(&mut app.chat);
    let (state, effects) = update(state, event);
    app.chat = state;

    if app.chat.transcript.len() != before {
        // Jump to the newest message; draw clamps to the last line.
        app.scroll = u16::MAX;
    }

    for effect in effects {
        let _ = effect_tx.send(effect);
    }
}

async fn run_effect(client: &BackendClient, effect: Effect) -> Event {
    match effect {
        Effect::Ingest { urls } => {
            let outcome = match client.ingest(urls.clone()).await {
                Ok(response) => Ok(response.inserted),
                Err(e) => Err(e.to_string()),
            };
            Event::IngestResolved { urls, outcome }
        }
        Effect::Query { question, request } => {
            let outcome = match client.query(&request).await {
                Ok(response) => Ok(QueryReply::from_response(response)),
                Err(e) => Err(e.to_string()),
            };
            Event::QueryResolved { question, outcome }
        }
    }
}
