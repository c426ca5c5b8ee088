//! agenda-timer - a single-screen terminal timer for a fixed daily agenda
//!
//! The library surface is the countdown/selection state machine plus the
//! agenda data model; the binary wires them to a 1 Hz clock task and a
//! terminal screen.

pub mod agenda;
pub mod config;
pub mod state;
pub mod tasks;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use agenda::{Agenda, AgendaItem, Category};
pub use config::Config;
pub use state::{Command, InvalidSelection, ItemStatus, ScheduleTimer, TimerState};
pub use utils::shutdown_signal;
