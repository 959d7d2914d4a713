//! Button bindings
//!
//! Reads button names from stdin, one per line, and forwards them to the
//! application state. This stands in for the five window buttons: any
//! shell that can write lines can drive the timer.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::state::AppState;

use super::Command;

/// Forward stdin lines as button presses until the input closes
pub async fn run_button_bindings(state: Arc<AppState>) {
    info!("Listening for controls on stdin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(command) => {
                        if let Err(e) = state.press(command) {
                            warn!("Dropping control: {}", e);
                            break;
                        }
                    }
                    Err(e) => warn!("{}", e),
                }
            }
            Ok(None) => {
                info!("Control input closed");
                break;
            }
            Err(e) => {
                warn!("Failed to read control input: {}", e);
                break;
            }
        }
    }
}
