//! Agenda data model and startup loading
//!
//! The agenda is fixed for the lifetime of a session: it is loaded (or taken
//! from the built-in schedule) once at startup and never mutated afterwards.

pub mod item;
pub mod loader;

// Re-export main types
pub use item::{AgendaItem, Category};
pub use loader::Agenda;
