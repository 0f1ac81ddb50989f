//! Keyboard input handling for the player.
//!
//! Enter advances to the next message, Space finishes the message being
//! typed, and q / Esc / Ctrl+C quit. Every other key is ignored.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::player::state::{InputResult, PlaybackState};

/// Handle a keyboard event.
pub fn handle_key_event(key: KeyEvent, state: &mut PlaybackState, now: Instant) -> InputResult {
    // Only act on presses; some platforms also report release/repeat
    if key.kind != KeyEventKind::Press {
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Story controls ===
        KeyCode::Enter => {
            state.advance(now);
            InputResult::Continue
        }
        KeyCode::Char(' ') => {
            state.finish();
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}
