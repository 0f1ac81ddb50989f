//! Mouse input handling for the player.
//!
//! A left click inside the terminal panel advances to the next message.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::player::state::{InputResult, PlaybackState};

/// Handle a mouse event.
pub fn handle_mouse_event(mouse: MouseEvent, state: &mut PlaybackState, now: Instant) -> InputResult {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if state.panel_contains(mouse.column, mouse.row) {
            state.advance(now);
        }
    }

    InputResult::Continue
}
