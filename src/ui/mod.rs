//! Terminal presentation layer
//!
//! Owns the terminal for the lifetime of the session: raw mode and the
//! alternate screen are entered on startup and restored on every exit path.
//! The event loop serializes tick events, key events and termination
//! signals, so the controller only ever has a single writer.

pub mod input;
pub mod screen;
pub mod theme;

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::widgets::ListState;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::state::{Command, ScheduleTimer};
use crate::tasks::Tick;
use crate::utils::shutdown_signal;
use input::{SelectionEntry, UiAction, map_key};
use theme::Theme;

/// Presentation-only state: theme choice, pending digit entry, footer notice
/// and the agenda list scroll position. Never read by the core.
pub struct UiState {
    pub dark: bool,
    pub entry: SelectionEntry,
    pub notice: Option<String>,
    pub list: ListState,
}

impl UiState {
    pub fn new(dark: bool) -> Self {
        Self {
            dark,
            entry: SelectionEntry::default(),
            notice: None,
            list: ListState::default(),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::resolve(self.dark)
    }
}

/// Run the screen until the user quits or a termination signal arrives.
pub async fn run(
    timer: &mut ScheduleTimer,
    ticks: mpsc::Receiver<Tick>,
    dark: bool,
) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, timer, ticks, dark).await;

    // Hand the terminal back on the error path too
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    timer: &mut ScheduleTimer,
    mut ticks: mpsc::Receiver<Tick>,
    dark: bool,
) -> Result<()> {
    let mut ui = UiState::new(dark);
    let mut events = EventStream::new();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        terminal.draw(|frame| screen::draw(frame, timer, &mut ui))?;

        tokio::select! {
            tick = ticks.recv() => match tick {
                Some(tick) => timer.tick(tick.now),
                None => {
                    warn!("Clock task stopped, leaving the screen");
                    break;
                }
            },
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => {
                    if handle_key(key, timer, &mut ui) {
                        info!("Quit requested");
                        break;
                    }
                }
                // Resize and similar events just trigger the next draw
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            _ = &mut shutdown => {
                info!("Termination signal received, leaving the screen");
                break;
            }
        }
    }

    Ok(())
}

/// Apply one key press. Returns true when the session should end.
fn handle_key(key: KeyEvent, timer: &mut ScheduleTimer, ui: &mut UiState) -> bool {
    let Some(action) = map_key(key, &mut ui.entry) else {
        return false;
    };

    match action {
        UiAction::Quit => return true,
        UiAction::ToggleTheme => ui.dark = !ui.dark,
        UiAction::ToggleRunning => {
            if !timer.state().is_running && timer.state().is_expired() {
                ui.notice = Some("countdown expired, reset to start again".to_string());
            } else {
                let command = if timer.state().is_running {
                    Command::Stop
                } else {
                    Command::Start
                };
                // Start and Stop cannot be rejected
                let _ = timer.apply(command);
                ui.notice = None;
            }
        }
        UiAction::Command(command) => {
            ui.notice = match timer.apply(command) {
                Ok(()) => None,
                Err(rejected) => Some(rejected.to_string()),
            };
        }
    }

    false
}
