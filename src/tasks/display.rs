//! Display surface task
//!
//! Consumes the frame channel and renders it: a one-line terminal clock
//! redrawn in place, or one JSON line per frame when an external shell
//! is attached.

use std::io::Write;
use std::sync::Arc;

use tracing::debug;

use crate::services::display::DisplayFrame;
use crate::state::AppState;

/// Render every published frame until the channel closes
pub async fn display_task(state: Arc<AppState>, json: bool) {
    let mut rx = state.subscribe_display();

    loop {
        let frame = rx.borrow_and_update().clone();
        if json {
            emit_json(&frame);
        } else {
            draw_terminal(&frame);
        }
        if rx.changed().await.is_err() {
            debug!("Display channel closed, stopping display task");
            break;
        }
    }
}

fn emit_json(frame: &DisplayFrame) {
    match serde_json::to_string(frame) {
        Ok(line) => println!("{}", line),
        Err(e) => debug!("Failed to serialize frame: {}", e),
    }
}

/// One-line clock, redrawn in place
fn draw_terminal(frame: &DisplayFrame) {
    let mut stdout = std::io::stdout();
    let _ = write!(
        stdout,
        "\r\x1b[2K{}{}\x1b[0m  {}  [{}]",
        color_code(&frame.color),
        frame.title,
        frame.clock(),
        frame.start_label
    );
    let _ = stdout.flush();
}

/// Map the display colors of the original window onto terminal colors
fn color_code(color: &str) -> &'static str {
    match color {
        "#b30000" => "\x1b[31m",
        "green" => "\x1b[32m",
        _ => "\x1b[0m",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_colors_map_onto_terminal_colors() {
        assert_eq!(color_code("#b30000"), "\x1b[31m");
        assert_eq!(color_code("green"), "\x1b[32m");
        assert_eq!(color_code("black"), "\x1b[0m");
    }

    #[test]
    fn frames_serialize_for_external_shells() {
        let frame = DisplayFrame::idle();
        let line = serde_json::to_string(&frame).unwrap();
        let back: DisplayFrame = serde_json::from_str(&line).unwrap();
        assert_eq!(back, frame);
    }
}
