//! State management module
//!
//! The countdown/selection state machine that everything else feeds or reads.

pub mod controller;
pub mod timer_state;

// Re-export main types
pub use controller::{Command, InvalidSelection, ItemStatus, ScheduleTimer};
pub use timer_state::TimerState;
