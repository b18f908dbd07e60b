//! Key mapping from terminal events to animation actions.

use crate::types::DonutAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to animation actions.
pub fn handle_key_event(key: KeyEvent) -> Option<DonutAction> {
    if should_quit(key) {
        return Some(DonutAction::Quit);
    }

    match key.code {
        KeyCode::Char('d') | KeyCode::Char('D') => Some(DonutAction::ToggleDebug),

        // Speed knobs
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('k') => {
            Some(DonutAction::SpeedUp)
        }
        KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Char('j') => {
            Some(DonutAction::SpeedDown)
        }

        _ => None,
    }
}

/// Check if key should stop the animation.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
