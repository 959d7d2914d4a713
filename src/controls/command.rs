//! Control commands: the five buttons

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One button press, mapped 1:1 onto a countdown engine operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// Begin a fresh phase, or resume a paused one
    Start,
    /// Pause the countdown in place
    Stop,
    /// Jump to the next phase
    Skip,
    /// Put the current phase back to its full duration
    Reset,
    /// Back to the initial state: first session, nothing on the clock
    Clear,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Stop => "stop",
            Command::Skip => "skip",
            Command::Reset => "reset",
            Command::Clear => "clear",
        }
    }

    /// Short help line for the startup banner
    pub fn describe(&self) -> &'static str {
        match self {
            Command::Start => "begin the session, or resume a paused one",
            Command::Stop => "pause the countdown",
            Command::Skip => "jump to the next session",
            Command::Reset => "put the current session back to full length",
            Command::Clear => "back to the first session with nothing on the clock",
        }
    }

    /// All buttons in display order
    pub fn all() -> [Command; 5] {
        [
            Command::Start,
            Command::Stop,
            Command::Skip,
            Command::Reset,
            Command::Clear,
        ]
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "start" => Ok(Command::Start),
            "stop" => Ok(Command::Stop),
            "skip" => Ok(Command::Skip),
            "reset" => Ok(Command::Reset),
            "clear" => Ok(Command::Clear),
            other => Err(format!("Unknown control: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_names_round_trip() {
        for command in Command::all() {
            let parsed = command.as_str().parse::<Command>().unwrap();
            assert_eq!(command, parsed);
        }
    }

    #[test]
    fn parsing_trims_and_ignores_case() {
        assert_eq!("  Start \n".parse::<Command>().unwrap(), Command::Start);
        assert_eq!("RESET".parse::<Command>().unwrap(), Command::Reset);
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!("pause".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }
}
