//! Countdown bookkeeping for the active phase

use serde::{Deserialize, Serialize};

/// Countdown state for the phase currently on the clock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Seconds the phase started from
    pub configured_seconds: u64,
    /// Seconds left on the clock
    pub remaining_seconds: u64,
    /// True while a tick is scheduled
    pub running: bool,
    /// True after an explicit Stop, until the countdown resumes
    pub user_paused: bool,
}

impl TimerState {
    /// Create the initial, empty timer state
    pub fn new() -> Self {
        Self {
            configured_seconds: 0,
            remaining_seconds: 0,
            running: false,
            user_paused: false,
        }
    }

    /// True until the first phase is put on the clock
    pub fn is_fresh(&self) -> bool {
        self.configured_seconds == 0
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_empty() {
        let state = TimerState::new();
        assert!(state.is_fresh());
        assert_eq!(state.remaining_seconds, 0);
        assert!(!state.running);
        assert!(!state.user_paused);
    }

    #[test]
    fn configuring_a_phase_clears_freshness() {
        let state = TimerState {
            configured_seconds: 1500,
            remaining_seconds: 1500,
            ..TimerState::new()
        };
        assert!(!state.is_fresh());
    }
}
