//! End-to-end scenarios driven through the public API against the built-in
//! reference agenda.

use agenda_timer::{Agenda, Command, ScheduleTimer};
use chrono::Local;

fn reference_timer() -> ScheduleTimer {
    ScheduleTimer::new(
        Agenda::builtin().expect("built-in agenda"),
        Local::now(),
    )
}

#[test]
fn welcoming_counts_down_from_thirty_minutes() {
    let mut timer = reference_timer();

    // Item 1 runs 09:00 - 09:30.
    assert_eq!(timer.state().selected_id, 1);
    assert_eq!(timer.current_item().duration_minutes(), 30);
    assert_eq!(timer.state().total_seconds, 1800);

    timer.apply(Command::Start).unwrap();
    for _ in 0..5 {
        timer.tick(Local::now());
    }

    assert_eq!(timer.state().remaining_seconds, 1795);
    assert_eq!(timer.formatted_countdown(), "29:55");
    let progress = timer.progress_percent();
    assert!((progress - 0.2777).abs() < 0.001, "progress was {progress}");
}

#[test]
fn the_last_item_has_no_next() {
    let mut timer = reference_timer();
    timer.apply(Command::Select(17)).unwrap();

    timer.apply(Command::Next).unwrap();
    assert_eq!(timer.state().selected_id, 17);
}

#[test]
fn the_first_item_has_no_previous() {
    let mut timer = reference_timer();

    timer.apply(Command::Previous).unwrap();
    assert_eq!(timer.state().selected_id, 1);
}

#[test]
fn stepping_through_the_day_reloads_every_duration() {
    let mut timer = reference_timer();

    for expected in 2..=17 {
        timer.apply(Command::Next).unwrap();
        assert_eq!(timer.state().selected_id, expected);
        assert_eq!(
            timer.state().total_seconds,
            timer.current_item().duration_seconds()
        );
        assert_eq!(timer.state().remaining_seconds, timer.state().total_seconds);
        assert!(!timer.state().is_running);
    }
}

#[test]
fn an_expired_break_needs_a_reset_before_it_can_run_again() {
    let mut timer = reference_timer();

    // Item 6 is the short 10-minute break.
    timer.apply(Command::Select(6)).unwrap();
    assert_eq!(timer.state().total_seconds, 600);

    timer.apply(Command::Start).unwrap();
    for _ in 0..600 {
        timer.tick(Local::now());
    }
    assert_eq!(timer.state().remaining_seconds, 0);
    assert!(!timer.state().is_running);

    // Expired countdowns ignore start until reset.
    timer.apply(Command::Start).unwrap();
    assert!(!timer.state().is_running);

    timer.apply(Command::Reset).unwrap();
    timer.apply(Command::Start).unwrap();
    assert!(timer.state().is_running);
    assert_eq!(timer.state().remaining_seconds, 600);
}

#[test]
fn selection_commands_reject_ids_outside_the_day() {
    let mut timer = reference_timer();

    assert!(timer.apply(Command::Select(0)).is_err());
    assert!(timer.apply(Command::Select(18)).is_err());
    assert_eq!(timer.state().selected_id, 1);
    assert_eq!(timer.state().total_seconds, 1800);
}
