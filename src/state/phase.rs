//! Session phase schedule

use serde::{Deserialize, Serialize};

/// Seconds in a work session
pub const WORK_SECONDS: u64 = 25 * 60;
/// Seconds in a short break
pub const SHORT_BREAK_SECONDS: u64 = 5 * 60;
/// Seconds in a long break; the product ships long breaks at the
/// work-session length
pub const LONG_BREAK_SECONDS: u64 = 25 * 60;

/// One contiguous interval of the Pomodoro cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Work,
    ShortBreak,
    LongBreak,
}

impl Phase {
    /// Derive the phase for a session counter value.
    ///
    /// Odd counters are work sessions. Every eighth counter is a long
    /// break (four work sessions and three short breaks come before it);
    /// the remaining even counters are short breaks.
    pub fn for_counter(counter: u64) -> Self {
        if counter % 2 == 1 {
            Phase::Work
        } else if counter % 8 == 0 {
            Phase::LongBreak
        } else {
            Phase::ShortBreak
        }
    }

    /// Phase length in seconds
    pub fn duration_secs(&self) -> u64 {
        match self {
            Phase::Work => WORK_SECONDS,
            Phase::ShortBreak => SHORT_BREAK_SECONDS,
            Phase::LongBreak => LONG_BREAK_SECONDS,
        }
    }

    /// Title shown on the display surface while this phase is on the clock
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Work => "Work Session",
            Phase::ShortBreak => "Short Break",
            Phase::LongBreak => "Long Break",
        }
    }

    /// Background color for the display surface
    pub fn color(&self) -> &'static str {
        match self {
            Phase::Work => "#b30000",
            Phase::ShortBreak => "green",
            Phase::LongBreak => "green",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_eight_counters_follow_the_schedule() {
        let expected = [
            Phase::Work,
            Phase::ShortBreak,
            Phase::Work,
            Phase::ShortBreak,
            Phase::Work,
            Phase::ShortBreak,
            Phase::Work,
            Phase::LongBreak,
        ];
        for (i, phase) in expected.iter().enumerate() {
            assert_eq!(Phase::for_counter(i as u64 + 1), *phase);
        }
    }

    #[test]
    fn durations_match_the_product_settings() {
        assert_eq!(Phase::Work.duration_secs(), 1500);
        assert_eq!(Phase::ShortBreak.duration_secs(), 300);
        assert_eq!(Phase::LongBreak.duration_secs(), 1500);
    }

    #[test]
    fn labels_and_colors_come_from_the_phase() {
        assert_eq!(Phase::Work.label(), "Work Session");
        assert_eq!(Phase::Work.color(), "#b30000");
        assert_eq!(Phase::ShortBreak.color(), Phase::LongBreak.color());
    }

    proptest! {
        #[test]
        fn schedule_rule_holds_for_any_counter(counter in 1u64..100_000) {
            let phase = Phase::for_counter(counter);
            if counter % 2 == 1 {
                prop_assert_eq!(phase, Phase::Work);
            } else if counter % 8 == 0 {
                prop_assert_eq!(phase, Phase::LongBreak);
            } else {
                prop_assert_eq!(phase, Phase::ShortBreak);
            }
        }
    }
}
