//! Timer state structure for the selected agenda item's countdown

use chrono::{DateTime, Local};

use crate::agenda::AgendaItem;

/// Countdown state for the currently selected agenda item.
///
/// `0 <= remaining_seconds <= total_seconds` holds at all times; the
/// controller is the only writer.
#[derive(Debug, Clone)]
pub struct TimerState {
    /// Id of the selected agenda item, always valid for the session's agenda.
    pub selected_id: u32,
    /// Seconds left on the countdown.
    pub remaining_seconds: u64,
    /// Full duration of the selected item in seconds.
    pub total_seconds: u64,
    /// Whether the countdown is actively decrementing.
    pub is_running: bool,
    /// Wall-clock time refreshed on every tick; display-only.
    pub wall_clock_now: DateTime<Local>,
}

impl TimerState {
    /// Create a paused state with the full duration of `item` on the clock.
    pub fn for_item(item: &AgendaItem, now: DateTime<Local>) -> Self {
        let total = item.duration_seconds();
        Self {
            selected_id: item.id,
            remaining_seconds: total,
            total_seconds: total,
            is_running: false,
            wall_clock_now: now,
        }
    }

    /// Whether the countdown has run out.
    pub fn is_expired(&self) -> bool {
        self.remaining_seconds == 0
    }
}
