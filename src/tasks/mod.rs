//! Background tasks module
//!
//! Tasks that run alongside the terminal UI.

pub mod clock;

// Re-export main types
pub use clock::{Tick, clock_tick_task};
