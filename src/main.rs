use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use ro0m::app::{config, r#loop::run_loop, state::AppState};
use ro0m::infrastructure::simulated::SimulatedMeeting;
use ro0m::logging;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Logging and settings come up BEFORE terminal setup so a failure here
    // doesn't leave the terminal in raw mode.
    if let Some(log_path) = config::get_log_path() {
        logging::init_tracing(&log_path)?;
    }

    let settings_path = config::get_config_path();
    let settings = settings_path
        .as_deref()
        .map(config::load_settings)
        .unwrap_or_default();
    let app_state = AppState::new(settings, settings_path);
    let facade = Arc::new(SimulatedMeeting::new());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, facade).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "event loop failed");
        println!("{err:?}");
    }

    Ok(())
}
