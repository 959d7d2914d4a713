//! External collaborators
//!
//! The display surface the countdown engine renders to and the alert
//! sink it notifies at the end of a phase.

pub mod alert;
pub mod display;

// Re-export main types
pub use alert::{AlertSink, PhaseAlert};
pub use display::{DisplayFrame, DisplaySink, WatchDisplay};
