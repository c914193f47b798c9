//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use taxguard_app::config::Settings;
use taxguard_app::message::Message;
use taxguard_app::state::AppState;
use taxguard_app::{process, signals};
use taxguard_client::PredictionService;
use taxguard_core::prelude::*;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Run the TUI against a prediction service until the user quits
pub async fn run<S>(settings: Settings, service: S) -> Result<()>
where
    S: PredictionService + Sync + 'static,
{
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    let mut state = AppState::with_settings(settings);
    let service = Arc::new(service);

    // Completions from prediction tasks and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(64);
    signals::spawn_signal_handler(msg_tx.clone());

    info!("Terminal UI started");
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &service);

    // Dropping the screen cancels any request still in flight
    state.request_quit();
    ratatui::restore();

    if let Err(ref e) = result {
        error!("Event loop failed: {}", e);
    }
    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    service: &Arc<S>,
) -> Result<()>
where
    S: PredictionService + Sync + 'static,
{
    while !state.should_quit() {
        // Process messages from background tasks
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx, service);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx, service);
        }
    }

    Ok(())
}
