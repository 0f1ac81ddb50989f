//! Input handling for the player.
//!
//! This module handles keyboard and mouse input events, dispatching
//! them to the appropriate handlers and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use std::time::Instant;

use crossterm::event::Event;

use crate::player::state::{InputResult, PlaybackState};

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Arguments
/// * `event` - The crossterm event to handle
/// * `state` - Mutable reference to playback state
/// * `now` - Time the event is handled at (start of any new reveal)
///
/// # Returns
/// `InputResult` indicating whether to continue or quit
pub fn handle_event(event: Event, state: &mut PlaybackState, now: Instant) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, state, now),
        Event::Mouse(mouse) => handle_mouse_event(mouse, state, now),
        Event::Resize(_, _) => {
            state.handle_resize();
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, paste, etc.
    }
}
