//! Tick scheduling capability
//!
//! The countdown engine never talks to the clock directly. It asks a
//! scheduler for a tick some delay out and gets a token back; cancelling
//! that token before it fires is the only other operation. The runtime
//! pumps the one-slot deadline implementation below from the countdown
//! task; tests substitute a recording scheduler and deliver ticks by
//! hand.

use std::time::Duration;

use tokio::time::Instant;

/// Handle for one scheduled tick
pub type TickToken = u64;

/// Deferred-tick capability injected into the countdown engine
pub trait TickScheduler {
    /// Schedule a tick `delay` from now, returning its token
    fn schedule_after(&mut self, delay: Duration) -> TickToken;

    /// Cancel a scheduled tick; unknown or already-fired tokens are ignored
    fn cancel(&mut self, token: TickToken);
}

/// One-slot scheduler backed by a wall-clock deadline.
///
/// Holds at most one pending tick; scheduling another replaces it. The
/// owning task waits on `next_deadline()` and calls `take_due()` once it
/// passes.
#[derive(Debug, Default)]
pub struct DeadlineScheduler {
    next_token: TickToken,
    pending: Option<(TickToken, Instant)>,
}

impl DeadlineScheduler {
    pub fn new() -> Self {
        Self {
            next_token: 0,
            pending: None,
        }
    }

    /// Deadline of the pending tick, if one is scheduled
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, at)| at)
    }

    /// Clear and return the pending tick once its deadline has passed
    pub fn take_due(&mut self) -> Option<TickToken> {
        self.pending.take().map(|(token, _)| token)
    }
}

impl TickScheduler for DeadlineScheduler {
    fn schedule_after(&mut self, delay: Duration) -> TickToken {
        self.next_token += 1;
        self.pending = Some((self.next_token, Instant::now() + delay));
        self.next_token
    }

    fn cancel(&mut self, token: TickToken) {
        if self.pending.map(|(t, _)| t) == Some(token) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_sets_a_deadline_and_cancel_clears_it() {
        let mut scheduler = DeadlineScheduler::new();
        assert!(scheduler.next_deadline().is_none());

        let token = scheduler.schedule_after(Duration::from_millis(1000));
        assert!(scheduler.next_deadline().is_some());

        scheduler.cancel(token);
        assert!(scheduler.next_deadline().is_none());
        assert!(scheduler.take_due().is_none());
    }

    #[test]
    fn cancel_ignores_stale_tokens() {
        let mut scheduler = DeadlineScheduler::new();
        let stale = scheduler.schedule_after(Duration::from_millis(1000));
        assert_eq!(scheduler.take_due(), Some(stale));

        let live = scheduler.schedule_after(Duration::from_millis(1000));
        scheduler.cancel(stale);
        assert!(scheduler.next_deadline().is_some());

        scheduler.cancel(live);
        assert!(scheduler.next_deadline().is_none());
    }

    #[test]
    fn tokens_are_never_reused() {
        let mut scheduler = DeadlineScheduler::new();
        let a = scheduler.schedule_after(Duration::from_millis(1000));
        let b = scheduler.schedule_after(Duration::from_millis(1000));
        assert_ne!(a, b);
    }
}
