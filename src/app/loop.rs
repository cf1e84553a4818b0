use crate::app::{
    action::Action,
    command::Command,
    input::map_event_to_action,
    keymap::KeyMap,
    keys::KeySequenceInterpreter,
    reducer,
    state::AppState,
    ui,
};
use crate::domain::meeting::MeetingFacade;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::time::{interval, Instant};

const TICK_RATE: Duration = Duration::from_millis(100);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    facade: Arc<dyn MeetingFacade>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, facade, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    facade: Arc<dyn MeetingFacade>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);
    let mut keys = KeySequenceInterpreter::new(KeyMap::new(), app_state.settings.chord_timeout());

    // Call activity from the backend
    let mut call_rx = facade.call_events();
    let call_tx = action_tx.clone();
    let call_forwarder = tokio::spawn(async move {
        loop {
            match call_rx.recv().await {
                Ok(event) => {
                    if call_tx.send(Action::CallEvent(event)).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "call events lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    tracing::info!(route = %app_state.route.path(), "event loop started");

    let result = loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => {
                keys.expire(Instant::now());
                Some(Action::Tick)
            },

            // User Input
            Some(res) = event_rx.recv() => {
                let event = match res {
                    Ok(e) => e,
                    Err(e) => break Err(e.into()),
                };
                map_event_to_action(event, &app_state, &mut keys, terminal.size()?, Instant::now())
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break Ok(());
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break Ok(());
            }

            if let Some(cmd) = command {
                handle_command(cmd, facade.clone(), action_tx.clone())?;
            }
        }
    };

    call_forwarder.abort();
    tracing::info!("event loop stopped");
    result
}

pub(crate) fn handle_command(
    command: Command,
    facade: Arc<dyn MeetingFacade>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    tracing::debug!(?command, "command");
    crate::app::features::meeting::handle_command(command, facade, tx)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
