//! Key mapping from terminal events to directional signals.

use crate::types::KeySignal;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to the directional signal it stands for, if any.
pub fn signal_for_key(key: KeyEvent) -> Option<KeySignal> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') => {
            Some(KeySignal::Up)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') => {
            Some(KeySignal::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') => {
            Some(KeySignal::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
            Some(KeySignal::Right)
        }
        _ => None,
    }
}

/// Check if key should end the run.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
