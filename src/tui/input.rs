// ABOUTME: Keyboard input handling for the TUI — translates key events into actions.
// ABOUTME: While a modal is open only dismiss keys and Ctrl+C are honored.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::state::{ModalKind, TuiState};

const PAGE_SCROLL: u16 = 10;

/// The result of processing a key event.
#[derive(Debug, PartialEq)]
pub enum InputResult {
    /// No action needed.
    None,
    /// Start or stop the session, starting with this camera.
    Toggle(String),
    /// Clear the remote log buffer.
    ClearLogs,
    /// A modal was dismissed.
    Dismissed(ModalKind),
    /// User wants to quit.
    Quit,
}

/// Process a key event against the current TUI state and return the resulting action.
pub fn handle_key(state: &mut TuiState, key: KeyEvent) -> InputResult {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputResult::Quit;
    }

    if state.has_modal() {
        return handle_modal_key(state, key);
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char('s') => {
            if state.toggle_pending {
                return InputResult::None;
            }
            state.toggle_pending = true;
            InputResult::Toggle(state.selected_camera().to_string())
        }
        KeyCode::Right | KeyCode::Tab => {
            state.cycle_camera(true);
            InputResult::None
        }
        KeyCode::Left | KeyCode::BackTab => {
            state.cycle_camera(false);
            InputResult::None
        }
        KeyCode::Char('c') => InputResult::ClearLogs,
        KeyCode::Up => {
            state.scroll_logs_up(1);
            InputResult::None
        }
        KeyCode::Down => {
            state.scroll_logs_down(1);
            InputResult::None
        }
        KeyCode::PageUp => {
            state.scroll_logs_up(PAGE_SCROLL);
            InputResult::None
        }
        KeyCode::PageDown => {
            state.scroll_logs_down(PAGE_SCROLL);
            InputResult::None
        }
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        _ => InputResult::None,
    }
}

/// Handle key events while a modal is shown.
fn handle_modal_key(state: &mut TuiState, key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => match state.dismiss_modal() {
            Some(kind) => InputResult::Dismissed(kind),
            None => InputResult::None,
        },
        _ => InputResult::None,
    }
}
