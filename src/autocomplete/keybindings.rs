//! Terminal key mapping for the controller
//!
//! Translates crossterm key events into the controller's [`Key`] set.
//! Modified keys (Ctrl/Alt) are left to the host application.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::events::Key;

/// Map a key press to a controller key.
///
/// Returns `None` for keys the controller has no opinion on, including text
/// input, which reaches the controller as an input change instead.
pub fn map_key(key: KeyEvent) -> Option<Key> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Tab => Some(Key::Tab),
        _ => None,
    }
}
