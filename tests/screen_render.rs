//! Render smoke test on a headless backend.

use agenda_timer::ui::{UiState, screen};
use agenda_timer::{Agenda, ScheduleTimer};
use chrono::Local;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn rendered_screen(timer: &ScheduleTimer, ui: &mut UiState) -> String {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|frame| screen::draw(frame, timer, ui))
        .expect("draw");
    format!("{:?}", terminal.backend().buffer())
}

#[test]
fn paints_the_reference_agenda() {
    let timer = ScheduleTimer::new(Agenda::builtin().unwrap(), Local::now());
    let mut ui = UiState::new(true);

    let screen = rendered_screen(&timer, &mut ui);
    assert!(screen.contains("Literacy Unlocked"));
    assert!(screen.contains("Welcoming"));
    assert!(screen.contains("Concluding Event"));
    assert!(screen.contains("ACTIVE"));
    assert!(screen.contains("UPCOMING"));
    assert!(screen.contains("30:00"));
    assert!(screen.contains("09:00 - 09:30"));
}

#[test]
fn marks_earlier_items_as_completed() {
    let mut timer = ScheduleTimer::new(Agenda::builtin().unwrap(), Local::now());
    timer.select_item(3).unwrap();
    let mut ui = UiState::new(false);

    let screen = rendered_screen(&timer, &mut ui);
    assert!(screen.contains("COMPLETED"));
    assert!(screen.contains("Team Assignment & Break"));
    // Item 3 runs 15 minutes.
    assert!(screen.contains("15:00"));
}
