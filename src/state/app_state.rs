//! Shared application state hub

use std::{sync::Mutex, time::Instant};

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};
use tracing::{info, warn};

use crate::controls::Command;
use crate::services::display::DisplayFrame;

/// Shared hub between the control surface, the countdown task, and
/// whatever renders the timer
#[derive(Debug)]
pub struct AppState {
    /// Button presses, drained by the countdown task
    cmd_tx: mpsc::UnboundedSender<Command>,
    /// Frames for the display surface
    display_tx: watch::Sender<DisplayFrame>,
    /// Keep one receiver alive to prevent channel closure
    _display_rx: watch::Receiver<DisplayFrame>,
    /// Last button press tracking
    last_action: Mutex<Option<Command>>,
    last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Process start, for uptime reporting
    start_time: Instant,
}

impl AppState {
    /// Create the hub, plus the command receiver for the countdown task
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Command>) {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (display_tx, display_rx) = watch::channel(DisplayFrame::idle());

        (
            Self {
                cmd_tx,
                display_tx,
                _display_rx: display_rx,
                last_action: Mutex::new(None),
                last_action_time: Mutex::new(None),
                start_time: Instant::now(),
            },
            cmd_rx,
        )
    }

    /// Forward one button press to the countdown task
    pub fn press(&self, command: Command) -> Result<(), String> {
        info!("Control pressed: {}", command);

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(command);
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        self.cmd_tx
            .send(command)
            .map_err(|e| format!("Failed to deliver control: {}", e))
    }

    pub fn start(&self) -> Result<(), String> {
        self.press(Command::Start)
    }

    pub fn stop(&self) -> Result<(), String> {
        self.press(Command::Stop)
    }

    pub fn skip(&self) -> Result<(), String> {
        self.press(Command::Skip)
    }

    pub fn reset(&self) -> Result<(), String> {
        self.press(Command::Reset)
    }

    pub fn clear(&self) -> Result<(), String> {
        self.press(Command::Clear)
    }

    /// Publish a frame to every display subscriber
    pub fn publish_frame(&self, frame: DisplayFrame) {
        // Fails only when every receiver is gone; the kept receiver
        // prevents that.
        if let Err(e) = self.display_tx.send(frame) {
            warn!("Failed to publish display frame: {}", e);
        }
    }

    /// Subscribe to display frames; the current frame is readable
    /// immediately
    pub fn subscribe_display(&self) -> watch::Receiver<DisplayFrame> {
        self.display_tx.subscribe()
    }

    /// Get last button press information
    pub fn get_last_action(&self) -> (Option<Command>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| *a);
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    /// Calculate process uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn press_records_and_delivers() {
        let (state, mut cmd_rx) = AppState::new();

        state.start().unwrap();
        state.stop().unwrap();

        assert_eq!(cmd_rx.recv().await, Some(Command::Start));
        assert_eq!(cmd_rx.recv().await, Some(Command::Stop));

        let (last, at) = state.get_last_action();
        assert_eq!(last, Some(Command::Stop));
        assert!(at.is_some());
    }

    #[tokio::test]
    async fn subscribers_see_the_idle_frame_first() {
        let (state, _cmd_rx) = AppState::new();
        let rx = state.subscribe_display();
        assert_eq!(*rx.borrow(), DisplayFrame::idle());
    }

    #[tokio::test]
    async fn published_frames_reach_subscribers() {
        let (state, _cmd_rx) = AppState::new();
        let mut rx = state.subscribe_display();

        let frame = DisplayFrame::for_phase(crate::state::Phase::Work, 1499, false);
        state.publish_frame(frame.clone());

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), frame);
    }

    #[tokio::test]
    async fn press_fails_once_the_countdown_task_is_gone() {
        let (state, cmd_rx) = AppState::new();
        drop(cmd_rx);
        assert!(state.skip().is_err());
    }
}
