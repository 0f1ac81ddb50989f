//! Player state management
//!
//! Contains the central `PlaybackState` struct (the playback controller)
//! and the shared types used across player modules.

use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};

use crate::player::display::Display;
use crate::player::reveal::Reveal;
use crate::story::Story;

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Exit the player
    Quit,
}

/// Start-up options for playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackOptions {
    /// Delay between successive character reveals
    pub typing_speed: Duration,
    /// Text drawn after a fully revealed message
    pub cursor_marker: String,
    /// Show the first message without waiting for input
    pub auto_start: bool,
}

impl PlaybackOptions {
    pub const DEFAULT_TYPING_SPEED: Duration = Duration::from_millis(10);
    pub const DEFAULT_CURSOR_MARKER: &'static str = "█";
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            typing_speed: Self::DEFAULT_TYPING_SPEED,
            cursor_marker: Self::DEFAULT_CURSOR_MARKER.to_string(),
            auto_start: true,
        }
    }
}

/// Central playback state.
///
/// Owns the story, the cursor into it, the single in-flight reveal and the
/// display surface. Time is always passed in, never read, so the whole
/// state machine can be driven from tests.
#[derive(Debug)]
pub struct PlaybackState {
    story: Story,
    cursor: usize,
    typing_speed: Duration,
    reveal: Option<Reveal>,
    display: Display,

    /// Screen area of the terminal panel (mouse hit-testing)
    pub panel_area: Rect,
    /// True when screen needs to be redrawn
    pub needs_render: bool,
}

impl PlaybackState {
    pub fn new(story: Story, typing_speed: Duration) -> Self {
        Self {
            story,
            cursor: 0,
            typing_speed,
            reveal: None,
            display: Display::new(),
            panel_area: Rect::default(),
            needs_render: true,
        }
    }

    /// Show the next message.
    ///
    /// Clears the display, replaces any in-flight reveal with one for the
    /// message at the cursor and moves the cursor forward. Once every
    /// message has been shown this does nothing and returns false.
    pub fn advance(&mut self, now: Instant) -> bool {
        let Some(message) = self.story.get(self.cursor) else {
            return false;
        };

        self.display.clear();
        // Replacing the reveal drops the old one, so none of its pending
        // characters can land on the cleared display.
        self.reveal = Some(Reveal::start(
            message,
            self.typing_speed,
            now,
            &mut self.display,
        ));
        self.cursor += 1;
        self.needs_render = true;

        tracing::debug!(
            index = self.cursor - 1,
            chars = message.char_count(),
            "Advanced to message"
        );
        true
    }

    /// Run the reveal step if it is due at `now`.
    ///
    /// Returns the character appended, if any.
    pub fn tick(&mut self, now: Instant) -> Option<char> {
        let ch = self.reveal.as_mut()?.step(now, &mut self.display);
        if ch.is_some() {
            self.needs_render = true;
        }
        ch
    }

    /// Complete the current reveal instantly. The cursor does not move.
    ///
    /// Returns the characters that were appended.
    pub fn finish(&mut self) -> String {
        let Some(reveal) = self.reveal.as_mut() else {
            return String::new();
        };
        let rest = reveal.finish(&mut self.display);
        self.needs_render = true;
        rest
    }

    /// When the next reveal step is due, if a reveal is in flight.
    pub fn next_due(&self) -> Option<Instant> {
        self.reveal.as_ref().and_then(Reveal::next_due)
    }

    /// True while a message is still being typed out.
    pub fn is_revealing(&self) -> bool {
        self.reveal.as_ref().is_some_and(|r| !r.is_done())
    }

    /// True once the last message has been fully revealed.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.story.len() && !self.is_revealing()
    }

    /// Number of messages shown so far (index of the next one).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn typing_speed(&self) -> Duration {
        self.typing_speed
    }

    pub fn story(&self) -> &Story {
        &self.story
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn reveal(&self) -> Option<&Reveal> {
        self.reveal.as_ref()
    }

    /// Whether a screen cell falls inside the terminal panel.
    pub fn panel_contains(&self, column: u16, row: u16) -> bool {
        self.panel_area.contains(Position::new(column, row))
    }

    /// Handle terminal resize event.
    pub fn handle_resize(&mut self) {
        self.needs_render = true;
    }
}
