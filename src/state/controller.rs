//! Schedule timer controller
//!
//! Owns the [`TimerState`], reacts to tick and command events and exposes
//! the derived values the presentation layer renders from.

use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::{info, warn};

use super::TimerState;
use crate::agenda::{Agenda, AgendaItem};
use crate::utils::format_countdown;

/// User commands forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select the item with this id directly.
    Select(u32),
    Start,
    Stop,
    Reset,
    Next,
    Previous,
}

/// Where an agenda item sits relative to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Past,
    Current,
    Upcoming,
}

/// Rejection of a select command whose id is outside the agenda.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no agenda item with id {id}")]
pub struct InvalidSelection {
    pub id: u32,
}

/// The schedule timer controller.
///
/// Exactly one instance exists per session and all state mutation goes
/// through its methods, so tick and command handling never race.
#[derive(Debug)]
pub struct ScheduleTimer {
    agenda: Agenda,
    state: TimerState,
}

impl ScheduleTimer {
    /// Create a controller with item 1 selected and the countdown paused.
    pub fn new(agenda: Agenda, now: DateTime<Local>) -> Self {
        let state = TimerState::for_item(&agenda.items()[0], now);
        Self { agenda, state }
    }

    /// The agenda this session runs.
    pub fn agenda(&self) -> &Agenda {
        &self.agenda
    }

    /// Read-only view of the countdown state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Advance one second of wall-clock time.
    ///
    /// Decrements the countdown while running and halts it once it reaches
    /// zero. Expiry never advances the selection; the timer simply stops.
    pub fn tick(&mut self, now: DateTime<Local>) {
        self.state.wall_clock_now = now;

        if !self.state.is_running {
            return;
        }
        if self.state.remaining_seconds > 0 {
            self.state.remaining_seconds -= 1;
        }
        if self.state.remaining_seconds == 0 {
            self.state.is_running = false;
            info!("Countdown expired for item {}", self.state.selected_id);
        }
    }

    /// Apply a user command. Only `Select` can be rejected.
    pub fn apply(&mut self, command: Command) -> Result<(), InvalidSelection> {
        match command {
            Command::Select(id) => self.select_item(id),
            Command::Start => {
                self.start();
                Ok(())
            }
            Command::Stop => {
                self.stop();
                Ok(())
            }
            Command::Reset => {
                self.reset();
                Ok(())
            }
            Command::Next => {
                self.select_next();
                Ok(())
            }
            Command::Previous => {
                self.select_previous();
                Ok(())
            }
        }
    }

    /// Select the item with `id` and reload the countdown with its duration.
    ///
    /// Out-of-range ids are rejected and leave the state untouched.
    pub fn select_item(&mut self, id: u32) -> Result<(), InvalidSelection> {
        let Some(item) = self.agenda.get(id) else {
            warn!("Rejected selection of unknown agenda item {}", id);
            return Err(InvalidSelection { id });
        };

        info!("Selected agenda item {} ({})", item.id, item.label);
        self.state = TimerState::for_item(item, self.state.wall_clock_now);
        Ok(())
    }

    /// Start the countdown. No-op when it has already expired.
    pub fn start(&mut self) {
        if self.state.is_expired() {
            return;
        }
        if !self.state.is_running {
            info!(
                "Countdown started for item {} with {}s remaining",
                self.state.selected_id, self.state.remaining_seconds
            );
        }
        self.state.is_running = true;
    }

    /// Stop the countdown. Idempotent.
    pub fn stop(&mut self) {
        if self.state.is_running {
            info!(
                "Countdown stopped for item {} with {}s remaining",
                self.state.selected_id, self.state.remaining_seconds
            );
        }
        self.state.is_running = false;
    }

    /// Put the full duration of the selected item back on the clock, paused.
    pub fn reset(&mut self) {
        self.state.remaining_seconds = self.state.total_seconds;
        self.state.is_running = false;
        info!("Countdown reset for item {}", self.state.selected_id);
    }

    /// Move the selection one item forward; no-op on the last item.
    pub fn select_next(&mut self) {
        let next = self.state.selected_id + 1;
        if next <= self.agenda.last_id() {
            let _ = self.select_item(next);
        }
    }

    /// Move the selection one item back; no-op on the first item.
    pub fn select_previous(&mut self) {
        if self.state.selected_id > 1 {
            let _ = self.select_item(self.state.selected_id - 1);
        }
    }

    /// The currently selected agenda item.
    pub fn current_item(&self) -> &AgendaItem {
        // selected_id is kept inside 1..=last_id by select_item
        &self.agenda.items()[self.state.selected_id as usize - 1]
    }

    /// Countdown rendered as `H:MM:SS` at or above one hour, `MM:SS` below.
    pub fn formatted_countdown(&self) -> String {
        format_countdown(self.state.remaining_seconds)
    }

    /// Elapsed share of the selected item, in percent of its duration.
    pub fn progress_percent(&self) -> f64 {
        if self.state.total_seconds == 0 {
            return 0.0;
        }
        let elapsed = self.state.total_seconds - self.state.remaining_seconds;
        elapsed as f64 / self.state.total_seconds as f64 * 100.0
    }

    /// Where `item` sits relative to the current selection.
    pub fn item_status(&self, item: &AgendaItem) -> ItemStatus {
        if item.id < self.state.selected_id {
            ItemStatus::Past
        } else if item.id == self.state.selected_id {
            ItemStatus::Current
        } else {
            ItemStatus::Upcoming
        }
    }

    /// Running and inside the final minute.
    pub fn is_urgent(&self) -> bool {
        self.state.is_running && self.state.remaining_seconds <= 60
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;
    use crate::agenda::{AgendaItem, Category};

    fn hm(raw: &str) -> NaiveTime {
        NaiveTime::parse_from_str(raw, "%H:%M").unwrap()
    }

    fn item(id: u32, label: &str, start: &str, end: &str) -> AgendaItem {
        AgendaItem {
            id,
            label: label.to_string(),
            start_time: hm(start),
            end_time: hm(end),
            category: Category::Activity,
        }
    }

    fn timer() -> ScheduleTimer {
        let agenda = Agenda::new(
            "Test Day".to_string(),
            None,
            vec![
                item(1, "Welcoming", "09:00", "09:30"),
                item(2, "Kick-Off", "09:30", "09:45"),
                item(3, "Wrap-Up", "09:45", "10:00"),
            ],
        )
        .unwrap();
        ScheduleTimer::new(agenda, Local::now())
    }

    fn now() -> DateTime<Local> {
        Local::now()
    }

    #[test]
    fn starts_on_item_one_paused() {
        let timer = timer();
        assert_eq!(timer.state().selected_id, 1);
        assert_eq!(timer.state().total_seconds, 1800);
        assert_eq!(timer.state().remaining_seconds, 1800);
        assert!(!timer.state().is_running);
    }

    #[test]
    fn every_selection_reloads_the_item_duration() {
        let mut timer = timer();
        for id in 1..=3 {
            timer.select_item(id).unwrap();
            let expected = timer.current_item().duration_seconds();
            assert_eq!(timer.state().total_seconds, expected);
            assert_eq!(timer.state().remaining_seconds, expected);
            assert!(!timer.state().is_running);
        }
    }

    #[test]
    fn out_of_range_selection_is_rejected_without_side_effects() {
        let mut timer = timer();
        timer.start();
        timer.tick(now());
        let before = timer.state().clone();

        assert_eq!(timer.select_item(0), Err(InvalidSelection { id: 0 }));
        assert_eq!(timer.select_item(4), Err(InvalidSelection { id: 4 }));

        assert_eq!(timer.state().selected_id, before.selected_id);
        assert_eq!(timer.state().remaining_seconds, before.remaining_seconds);
        assert_eq!(timer.state().total_seconds, before.total_seconds);
        assert_eq!(timer.state().is_running, before.is_running);
    }

    #[test]
    fn tick_only_decrements_while_running() {
        let mut timer = timer();
        timer.tick(now());
        assert_eq!(timer.state().remaining_seconds, 1800);

        timer.start();
        timer.tick(now());
        assert_eq!(timer.state().remaining_seconds, 1799);

        timer.stop();
        timer.tick(now());
        assert_eq!(timer.state().remaining_seconds, 1799);
    }

    #[test]
    fn countdown_expires_and_stops_after_total_seconds_ticks() {
        let mut timer = timer();
        timer.select_item(2).unwrap();
        timer.start();

        for _ in 0..timer.state().total_seconds {
            timer.tick(now());
        }

        assert_eq!(timer.state().remaining_seconds, 0);
        assert!(!timer.state().is_running);

        // Further ticks stay at zero.
        timer.tick(now());
        assert_eq!(timer.state().remaining_seconds, 0);
        assert!(!timer.state().is_running);
    }

    #[test]
    fn start_is_a_noop_on_an_expired_countdown() {
        let mut timer = timer();
        timer.select_item(2).unwrap();
        timer.start();
        for _ in 0..timer.state().total_seconds {
            timer.tick(now());
        }

        timer.start();
        assert!(!timer.state().is_running);

        timer.reset();
        timer.start();
        assert!(timer.state().is_running);
        assert_eq!(timer.state().remaining_seconds, 900);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut timer = timer();
        timer.start();
        timer.stop();
        let once = timer.state().clone();
        timer.stop();
        assert_eq!(timer.state().is_running, once.is_running);
        assert_eq!(timer.state().remaining_seconds, once.remaining_seconds);
    }

    #[test]
    fn reset_restores_the_full_duration() {
        let mut timer = timer();
        timer.start();
        for _ in 0..100 {
            timer.tick(now());
        }
        assert_eq!(timer.state().remaining_seconds, 1700);

        timer.reset();
        assert_eq!(timer.state().remaining_seconds, 1800);
        assert!(!timer.state().is_running);
    }

    #[test]
    fn next_and_previous_stay_inside_the_agenda() {
        let mut timer = timer();
        timer.select_previous();
        assert_eq!(timer.state().selected_id, 1);

        timer.select_next();
        assert_eq!(timer.state().selected_id, 2);
        timer.select_next();
        timer.select_next();
        assert_eq!(timer.state().selected_id, 3);

        timer.select_previous();
        assert_eq!(timer.state().selected_id, 2);
    }

    #[test]
    fn selecting_interrupts_a_running_countdown() {
        let mut timer = timer();
        timer.start();
        timer.tick(now());
        timer.select_next();
        assert!(!timer.state().is_running);
        assert_eq!(timer.state().remaining_seconds, 900);
    }

    #[test]
    fn commands_dispatch_through_apply() {
        let mut timer = timer();
        timer.apply(Command::Start).unwrap();
        assert!(timer.state().is_running);
        timer.apply(Command::Stop).unwrap();
        assert!(!timer.state().is_running);
        timer.apply(Command::Next).unwrap();
        assert_eq!(timer.state().selected_id, 2);
        timer.apply(Command::Previous).unwrap();
        assert_eq!(timer.state().selected_id, 1);
        timer.apply(Command::Select(3)).unwrap();
        assert_eq!(timer.state().selected_id, 3);
        assert_eq!(
            timer.apply(Command::Select(99)),
            Err(InvalidSelection { id: 99 })
        );
        timer.apply(Command::Reset).unwrap();
        assert_eq!(timer.state().remaining_seconds, timer.state().total_seconds);
    }

    #[test]
    fn progress_tracks_elapsed_share() {
        let mut timer = timer();
        assert_eq!(timer.progress_percent(), 0.0);

        timer.start();
        for _ in 0..450 {
            timer.tick(now());
        }
        assert!((timer.progress_percent() - 25.0).abs() < f64::EPSILON);

        for _ in 0..1350 {
            timer.tick(now());
        }
        assert!((timer.progress_percent() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn urgency_needs_a_running_final_minute() {
        let mut timer = timer();
        timer.select_item(2).unwrap();
        assert!(!timer.is_urgent());

        timer.start();
        for _ in 0..839 {
            timer.tick(now());
        }
        assert_eq!(timer.state().remaining_seconds, 61);
        assert!(!timer.is_urgent());

        timer.tick(now());
        assert_eq!(timer.state().remaining_seconds, 60);
        assert!(timer.is_urgent());

        timer.stop();
        assert!(!timer.is_urgent());
    }

    #[test]
    fn item_status_partitions_the_agenda() {
        let mut timer = timer();
        timer.select_item(2).unwrap();
        let items = timer.agenda().items().to_vec();
        assert_eq!(timer.item_status(&items[0]), ItemStatus::Past);
        assert_eq!(timer.item_status(&items[1]), ItemStatus::Current);
        assert_eq!(timer.item_status(&items[2]), ItemStatus::Upcoming);
    }

    #[test]
    fn remaining_never_exceeds_total() {
        let mut timer = timer();
        timer.start();
        for _ in 0..2000 {
            timer.tick(now());
            assert!(timer.state().remaining_seconds <= timer.state().total_seconds);
        }
        timer.reset();
        assert!(timer.state().remaining_seconds <= timer.state().total_seconds);
    }

    #[test]
    fn tick_refreshes_the_wall_clock_even_when_paused() {
        let mut timer = timer();
        let later = Local::now() + chrono::Duration::seconds(5);
        timer.tick(later);
        assert_eq!(timer.state().wall_clock_now, later);
    }
}
