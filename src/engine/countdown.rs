//! The countdown engine
//!
//! An explicit Idle / Running / Paused state machine around the session
//! counter and the remaining-seconds clock. Button commands and tick
//! arrivals are the only inputs; frames, alerts, and scheduler calls are
//! the only outputs. Every operation is a total function: a command that
//! does not apply in the current state is a silent no-op.

use std::time::Duration;

use tracing::debug;

use crate::controls::Command;
use crate::services::alert::AlertSink;
use crate::services::display::{DisplayFrame, DisplaySink};
use crate::state::{Phase, TimerState};

use super::scheduler::{TickScheduler, TickToken};

/// Milliseconds between ticks
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Countdown engine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No active countdown; remaining seconds may be stale
    Idle,
    /// A tick is scheduled
    Running,
    /// Remaining seconds hold a valid value, no tick scheduled
    Paused,
}

/// Capabilities the engine drives: the tick scheduler, the display
/// surface, and the end-of-phase alert
pub struct EngineContext<'a> {
    pub scheduler: &'a mut dyn TickScheduler,
    pub display: &'a mut dyn DisplaySink,
    pub alert: &'a mut dyn AlertSink,
}

/// The countdown engine; one instance, owned by the countdown task
pub struct CountdownEngine {
    counter: u64,
    timer: TimerState,
    state: EngineState,
    pending: Option<TickToken>,
}

impl CountdownEngine {
    pub fn new() -> Self {
        Self {
            counter: 1,
            timer: TimerState::new(),
            state: EngineState::Idle,
            pending: None,
        }
    }

    /// Session counter: completed or skipped phases, plus one
    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    /// Phase the counter currently selects
    pub fn phase(&self) -> Phase {
        Phase::for_counter(self.counter)
    }

    /// Dispatch one button command
    pub fn apply(&mut self, command: Command, cx: &mut EngineContext<'_>) {
        debug!("Applying control: {}", command);
        match command {
            Command::Start => self.start(cx),
            Command::Stop => self.stop(cx),
            Command::Skip => self.skip(cx),
            Command::Reset => self.restart(cx),
            Command::Clear => self.clear(cx),
        }
    }

    /// Begin a fresh phase from Idle, or resume a paused countdown. A
    /// second Start while running changes nothing, so a tick is never
    /// scheduled twice.
    pub fn start(&mut self, cx: &mut EngineContext<'_>) {
        match self.state {
            EngineState::Running => {}
            EngineState::Paused => {
                self.timer.user_paused = false;
                self.render(cx);
                self.begin_ticking(cx);
            }
            EngineState::Idle => {
                let phase = self.phase();
                self.timer.configured_seconds = phase.duration_secs();
                self.timer.remaining_seconds = phase.duration_secs();
                self.timer.user_paused = false;
                self.render(cx);
                self.begin_ticking(cx);
            }
        }
    }

    /// One tick: a second off the clock and a display refresh. At zero,
    /// alert, advance the session counter, and chain straight into the
    /// next phase.
    pub fn tick(&mut self, cx: &mut EngineContext<'_>) {
        if self.state != EngineState::Running {
            // A tick that outlived its cancellation has nothing to act on.
            return;
        }
        self.pending = None;
        self.timer.remaining_seconds = self.timer.remaining_seconds.saturating_sub(1);
        self.render(cx);
        if self.timer.remaining_seconds == 0 {
            cx.alert.notify();
            self.counter += 1;
            self.to_idle();
            self.start(cx);
        } else {
            self.pending = Some(
                cx.scheduler
                    .schedule_after(Duration::from_millis(TICK_INTERVAL_MS)),
            );
        }
    }

    /// Pause the countdown in place
    pub fn stop(&mut self, cx: &mut EngineContext<'_>) {
        if self.state != EngineState::Running {
            return;
        }
        self.cancel_pending(cx);
        self.timer.running = false;
        self.timer.user_paused = true;
        self.state = EngineState::Paused;
        self.render(cx);
    }

    /// Abandon the current phase and start the next one at full length
    pub fn skip(&mut self, cx: &mut EngineContext<'_>) {
        self.cancel_pending(cx);
        self.timer.running = false;
        self.timer.user_paused = false;
        self.state = EngineState::Idle;
        self.counter += 1;
        self.start(cx);
    }

    /// Put the current phase back to its full duration and hold it
    /// paused there. Does not advance the session counter.
    pub fn restart(&mut self, cx: &mut EngineContext<'_>) {
        self.cancel_pending(cx);
        self.timer.running = false;
        self.timer.user_paused = false;
        if self.timer.is_fresh() {
            // Nothing has been on the clock yet; the next Start opens the
            // phase fresh.
            self.state = EngineState::Idle;
            return;
        }
        self.timer.remaining_seconds = self.timer.configured_seconds;
        self.state = EngineState::Paused;
        self.render(cx);
    }

    /// Back to the initial state: first session, empty timer, idle frame
    pub fn clear(&mut self, cx: &mut EngineContext<'_>) {
        self.cancel_pending(cx);
        self.counter = 1;
        self.timer = TimerState::new();
        self.state = EngineState::Idle;
        cx.display.render(DisplayFrame::idle());
    }

    fn begin_ticking(&mut self, cx: &mut EngineContext<'_>) {
        self.timer.running = true;
        self.state = EngineState::Running;
        self.pending = Some(
            cx.scheduler
                .schedule_after(Duration::from_millis(TICK_INTERVAL_MS)),
        );
    }

    /// Cancel before any state mutation, so a stale tick can never land
    /// on freshly reset state
    fn cancel_pending(&mut self, cx: &mut EngineContext<'_>) {
        if let Some(token) = self.pending.take() {
            cx.scheduler.cancel(token);
        }
    }

    fn to_idle(&mut self) {
        self.timer.running = false;
        self.state = EngineState::Idle;
    }

    fn render(&self, cx: &mut EngineContext<'_>) {
        cx.display.render(DisplayFrame::for_phase(
            self.phase(),
            self.timer.remaining_seconds,
            self.state == EngineState::Paused && self.timer.user_paused,
        ));
    }
}

impl Default for CountdownEngine {
    fn default() -> Self {
        Self::new()
    }
}
