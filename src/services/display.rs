//! Display surface: the frames published to whatever renders the timer

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::state::phase::WORK_SECONDS;
use crate::state::{AppState, Phase};

/// Title shown when no phase is on the clock
pub const IDLE_TITLE: &str = "Pomodoro Timer";
/// Background color when no phase is on the clock
pub const IDLE_COLOR: &str = "black";

/// Format seconds as `M:SS`, minutes unpadded
pub fn format_clock(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// One value published to the display surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFrame {
    pub title: String,
    pub remaining_seconds: u64,
    pub color: String,
    /// Label for the Start button: "Start", or "Resume" after a pause
    pub start_label: String,
}

impl DisplayFrame {
    /// Frame for an active phase
    pub fn for_phase(phase: Phase, remaining_seconds: u64, resumable: bool) -> Self {
        Self {
            title: phase.label().to_string(),
            remaining_seconds,
            color: phase.color().to_string(),
            start_label: if resumable { "Resume" } else { "Start" }.to_string(),
        }
    }

    /// The default frame: idle title, work duration previewed on the clock
    pub fn idle() -> Self {
        Self {
            title: IDLE_TITLE.to_string(),
            remaining_seconds: WORK_SECONDS,
            color: IDLE_COLOR.to_string(),
            start_label: "Start".to_string(),
        }
    }

    /// The clock text for this frame
    pub fn clock(&self) -> String {
        format_clock(self.remaining_seconds)
    }
}

/// Where the countdown engine publishes frames
pub trait DisplaySink {
    fn render(&mut self, frame: DisplayFrame);
}

/// Production sink: publishes frames through the shared hub
pub struct WatchDisplay {
    state: Arc<AppState>,
}

impl WatchDisplay {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }
}

impl DisplaySink for WatchDisplay {
    fn render(&mut self, frame: DisplayFrame) {
        self.state.publish_frame(frame);
    }
}
