//! Key mapping from terminal events to camera actions.

use crate::types::CameraAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to camera actions.
pub fn handle_key_event(key: KeyEvent) -> Option<CameraAction> {
    // Ctrl+C is reserved for quitting.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(CameraAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(CameraAction::MoveRight),
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(CameraAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(CameraAction::MoveDown),

        KeyCode::Char(' ') => Some(CameraAction::Stop),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
