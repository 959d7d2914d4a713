//! Countdown engine module
//!
//! The Idle/Running/Paused state machine and the scheduler capability it
//! ticks through.

pub mod countdown;
pub mod scheduler;

// Re-export main types
pub use countdown::{CountdownEngine, EngineContext, EngineState, TICK_INTERVAL_MS};
pub use scheduler::{DeadlineScheduler, TickScheduler, TickToken};
