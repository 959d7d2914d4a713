//! Countdown driver task

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::sleep_until;
use tracing::{debug, info};

use crate::controls::Command;
use crate::engine::{CountdownEngine, DeadlineScheduler, EngineContext};
use crate::services::alert::PhaseAlert;
use crate::services::display::WatchDisplay;
use crate::state::AppState;

/// Owns the countdown engine and pumps it: button presses and due ticks
/// interleave through one select loop, so engine state has exactly one
/// mutator.
pub async fn countdown_task(
    state: Arc<AppState>,
    mut cmd_rx: mpsc::UnboundedReceiver<Command>,
    desktop_alerts: bool,
) {
    info!("Starting countdown task");

    let mut engine = CountdownEngine::new();
    let mut scheduler = DeadlineScheduler::new();
    let mut display = WatchDisplay::new(Arc::clone(&state));
    let mut alert = PhaseAlert::new(desktop_alerts);

    loop {
        let deadline = scheduler.next_deadline();

        tokio::select! {
            maybe_cmd = cmd_rx.recv() => {
                match maybe_cmd {
                    Some(command) => {
                        let mut cx = EngineContext {
                            scheduler: &mut scheduler,
                            display: &mut display,
                            alert: &mut alert,
                        };
                        engine.apply(command, &mut cx);
                    }
                    None => {
                        debug!("Control channel closed, stopping countdown task");
                        break;
                    }
                }
            }
            () = async {
                match deadline {
                    Some(at) => sleep_until(at).await,
                    None => std::future::pending().await,
                }
            } => {
                // A command handled in the meantime may have cancelled the
                // tick that woke us.
                if scheduler.take_due().is_some() {
                    let mut cx = EngineContext {
                        scheduler: &mut scheduler,
                        display: &mut display,
                        alert: &mut alert,
                    };
                    engine.tick(&mut cx);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::advance;

    /// Let the spawned task drain its queue without moving the clock
    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn virtual_seconds_move_the_published_clock() {
        let (state, cmd_rx) = AppState::new();
        let state = Arc::new(state);
        let task = tokio::spawn(countdown_task(Arc::clone(&state), cmd_rx, false));

        let rx = state.subscribe_display();

        state.start().unwrap();
        settle().await;
        assert_eq!(rx.borrow().title, "Work Session");
        assert_eq!(rx.borrow().clock(), "25:00");

        for _ in 0..3 {
            advance(Duration::from_secs(1)).await;
            settle().await;
        }
        assert_eq!(rx.borrow().clock(), "24:57");

        task.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn skip_moves_the_display_to_the_next_phase() {
        let (state, cmd_rx) = AppState::new();
        let state = Arc::new(state);
        let task = tokio::spawn(countdown_task(Arc::clone(&state), cmd_rx, false));

        let rx = state.subscribe_display();

        state.start().unwrap();
        settle().await;
        state.skip().unwrap();
        settle().await;

        assert_eq!(rx.borrow().title, "Short Break");
        assert_eq!(rx.borrow().clock(), "5:00");

        state.clear().unwrap();
        settle().await;
        assert_eq!(rx.borrow().title, "Pomodoro Timer");

        task.abort();
    }
}
