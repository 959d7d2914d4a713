//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "tomato-clock")]
#[command(about = "A session-driven Pomodoro countdown timer")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Emit display frames as JSON lines instead of drawing the terminal clock
    #[arg(long)]
    pub json: bool,

    /// Skip desktop notifications at the end of a phase (terminal bell only)
    #[arg(long)]
    pub no_desktop_alerts: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Whether phase completion should raise a desktop notification
    pub fn desktop_alerts(&self) -> bool {
        !self.no_desktop_alerts
    }
}
