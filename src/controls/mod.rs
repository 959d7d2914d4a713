//! Control surface module
//!
//! The five buttons as commands, plus the stdin bindings that forward
//! them to the countdown task.

pub mod bindings;
pub mod command;

// Re-export main types
pub use bindings::run_button_bindings;
pub use command::Command;
