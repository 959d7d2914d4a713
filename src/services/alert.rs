//! Alert sink: signals the end of a phase

use std::io::Write;

use notify_rust::Notification;
use tracing::warn;

/// Receives the end-of-phase signal
pub trait AlertSink {
    fn notify(&mut self);
}

/// Production alert: terminal bell, plus a desktop notification unless
/// disabled by configuration
pub struct PhaseAlert {
    desktop: bool,
}

impl PhaseAlert {
    pub fn new(desktop: bool) -> Self {
        Self { desktop }
    }
}

impl AlertSink for PhaseAlert {
    fn notify(&mut self) {
        ring_bell();
        if self.desktop {
            if let Err(e) = send_desktop_notification() {
                warn!("Failed to send desktop notification: {}", e);
            }
        }
    }
}

/// Write the terminal bell to stdout
fn ring_bell() {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}

fn send_desktop_notification() -> Result<(), Box<dyn std::error::Error>> {
    Notification::new()
        .summary("Pomodoro Timer")
        .body("Session complete. The next one is on the clock.")
        .timeout(0) // No auto-dismiss
        .show()?;
    Ok(())
}
