//! Main TUI runner - entry point and event loop
//!
//! The loop drains fetch completions, draws a frame, then polls the
//! terminal. State changes only happen through the update function.

use tokio::sync::mpsc;
use tracing::warn;

use gstview_api::GstApiClient;
use gstview_app::{handler, AppState, Message, Settings, UpdateAction};
use gstview_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI application
pub async fn run(settings: Settings, initial_gstin: Option<String>) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // A bad base URL fails here, before the terminal is taken over
    let client = GstApiClient::new(settings.api.base_url.clone())?;

    let mut term = ratatui::init();

    let mut state = AppState::new(settings);
    if let Some(gstin) = initial_gstin {
        state.input = gstin;
    }

    // Fetch completions arrive here from spawned lookup tasks
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(64);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &client);

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    client: &GstApiClient,
) -> Result<()> {
    while !state.should_quit() {
        // Drain completed lookups (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, client);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, client);
        }
    }

    Ok(())
}

/// Process a message through the TEA update function, following any
/// follow-up messages it produces.
fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &GstApiClient,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), client.clone());
        }

        msg = result.message;
    }
}

/// Perform an action outside the update function
fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, client: GstApiClient) {
    match action {
        UpdateAction::FetchDetails { seq, gstin } => {
            tokio::spawn(async move {
                let message = match client.fetch_details(&gstin).await {
                    Ok(details) => Message::FetchSucceeded {
                        seq,
                        details: Box::new(details),
                    },
                    Err(e) => Message::FetchFailed {
                        seq,
                        error: e.to_string(),
                    },
                };
                if msg_tx.send(message).await.is_err() {
                    warn!(seq, "event loop gone before lookup completion");
                }
            });
        }
    }
}
