//! Key handling: raw terminal keys to timer commands

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::Command;

/// UI-level result of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Forward a command to the controller.
    Command(Command),
    /// Start or stop, depending on the current running state.
    ToggleRunning,
    /// Flip between the light and dark palette.
    ToggleTheme,
    /// Leave the screen.
    Quit,
}

/// Pending digit entry for selecting an item by id.
#[derive(Debug, Default)]
pub struct SelectionEntry {
    digits: String,
}

impl SelectionEntry {
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    fn push(&mut self, digit: char) {
        // Three digits cover any realistic agenda
        if self.digits.len() < 3 {
            self.digits.push(digit);
        }
    }

    fn pop(&mut self) {
        self.digits.pop();
    }

    /// Consume the entry, yielding the entered id if there is one.
    fn take(&mut self) -> Option<u32> {
        let id = self.digits.parse().ok();
        self.digits.clear();
        id
    }
}

/// Map a key press to an action, updating the pending selection entry.
///
/// Returns `None` for keys that only edit the entry or do nothing.
pub fn map_key(key: KeyEvent, entry: &mut SelectionEntry) -> Option<UiAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiAction::Quit);
    }

    match key.code {
        KeyCode::Char('q') => Some(UiAction::Quit),
        KeyCode::Char(' ') => Some(UiAction::ToggleRunning),
        KeyCode::Char('r') => Some(UiAction::Command(Command::Reset)),
        KeyCode::Char('t') => Some(UiAction::ToggleTheme),
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('l') => {
            Some(UiAction::Command(Command::Next))
        }
        KeyCode::Left | KeyCode::Char('p') | KeyCode::Char('h') => {
            Some(UiAction::Command(Command::Previous))
        }
        KeyCode::Char(digit @ '0'..='9') => {
            entry.push(digit);
            None
        }
        KeyCode::Backspace => {
            entry.pop();
            None
        }
        KeyCode::Enter => entry
            .take()
            .map(|id| UiAction::Command(Command::Select(id))),
        KeyCode::Esc => {
            if entry.is_empty() {
                Some(UiAction::Quit)
            } else {
                entry.clear();
                None
            }
        }
        _ => None,
    }
}
