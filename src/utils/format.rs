//! Time formatting for the countdown readout and the wall clock

use chrono::{DateTime, Local};

/// Render a countdown as `H:MM:SS` at or above one hour, `MM:SS` below.
///
/// Minutes and seconds are zero-padded to two digits; hours are not padded.
pub fn format_countdown(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Render the wall clock as `HH:MM`, 24h.
pub fn format_clock(now: &DateTime<Local>) -> String {
    now.format("%H:%M").to_string()
}
