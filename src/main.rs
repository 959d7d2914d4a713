//! Tomato Clock - a session-driven Pomodoro countdown timer
//!
//! This is the main entry point for the tomato-clock application.

use std::sync::Arc;

use tracing::info;

use tomato_clock::{
    config::Config,
    controls::{run_button_bindings, Command},
    state::AppState,
    tasks::{countdown_task, display_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    let desktop_alerts = config.desktop_alerts();
    let json_frames = config.json;

    // Initialize tracing with the appropriate log level; stdout belongs
    // to the display surface, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(format!("tomato_clock={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting tomato-clock v0.1.0");
    info!("Sessions: 25min work / 5min short break, long break every 4th session");

    // Create the application state and hand the command stream to the
    // countdown task
    let (state, cmd_rx) = AppState::new();
    let state = Arc::new(state);

    let countdown_state = Arc::clone(&state);
    tokio::spawn(async move {
        countdown_task(countdown_state, cmd_rx, desktop_alerts).await;
    });

    let bindings_state = Arc::clone(&state);
    tokio::spawn(async move {
        run_button_bindings(bindings_state).await;
    });

    info!("Controls (one per line on stdin):");
    for command in Command::all() {
        info!("  {:<5} - {}", command, command.describe());
    }

    // Render frames until shutdown
    tokio::select! {
        () = display_task(Arc::clone(&state), json_frames) => {}
        () = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Timer shut down after {}", state.get_uptime());
    Ok(())
}
