//! Typewriter reveal state machine.
//!
//! A `Reveal` walks one message character by character. It never owns a
//! timer: the player asks it when the next step is due and calls
//! [`Reveal::step`] once that time has passed. Dropping the value cancels
//! the reveal.

use std::time::{Duration, Instant};

use crate::player::display::Display;
use crate::story::Message;

/// Observable state of a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Next character to append is at this position
    Revealing(usize),
    /// All characters and the cursor marker have been appended
    Done,
}

/// In-flight reveal of a single message.
#[derive(Debug, Clone)]
pub struct Reveal {
    chars: Vec<char>,
    position: usize,
    typing_speed: Duration,
    next_due: Instant,
    done: bool,
}

impl Reveal {
    /// Start revealing `message` at `now`.
    ///
    /// The first character is due one `typing_speed` after `now`. An empty
    /// message appends the cursor marker immediately and starts out done.
    pub fn start(
        message: &Message,
        typing_speed: Duration,
        now: Instant,
        display: &mut Display,
    ) -> Self {
        let chars: Vec<char> = message.text().chars().collect();
        let done = chars.is_empty();
        if done {
            display.show_marker();
        }

        Self {
            chars,
            position: 0,
            typing_speed,
            next_due: now + typing_speed,
            done,
        }
    }

    pub fn state(&self) -> RevealState {
        if self.done {
            RevealState::Done
        } else {
            RevealState::Revealing(self.position)
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Total number of characters in the message.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// When the next step should run, or `None` once done.
    pub fn next_due(&self) -> Option<Instant> {
        (!self.done).then_some(self.next_due)
    }

    /// Run one step if it is due.
    ///
    /// Appends at most one character. The following step is scheduled
    /// `typing_speed` after `now`, so a late tick delays the rest of the
    /// reveal instead of bursting to catch up. The marker is appended in
    /// the same step as the final character.
    pub fn step(&mut self, now: Instant, display: &mut Display) -> Option<char> {
        if self.done || now < self.next_due {
            return None;
        }

        let ch = self.chars[self.position];
        display.push(ch);
        self.position += 1;

        if self.position >= self.chars.len() {
            display.show_marker();
            self.done = true;
        } else {
            self.next_due = now + self.typing_speed;
        }

        Some(ch)
    }

    /// Append every remaining character and the marker at once.
    ///
    /// Returns the characters that were appended.
    pub fn finish(&mut self, display: &mut Display) -> String {
        if self.done {
            return String::new();
        }

        let rest: String = self.chars[self.position..].iter().collect();
        for &ch in &self.chars[self.position..] {
            display.push(ch);
        }
        self.position = self.chars.len();
        display.show_marker();
        self.done = true;
        rest
    }
}
