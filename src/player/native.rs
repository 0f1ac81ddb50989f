//! Native TUI player.
//!
//! Runs the event loop: draw when something changed, wait for input until
//! the next reveal step is due, dispatch the input, then run the reveal
//! step.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::player::input::handle_event;
use crate::player::render::render_frame;
use crate::player::state::{InputResult, PlaybackOptions, PlaybackState};
use crate::story::Story;
use crate::tui::App;

/// Longest the loop sleeps when no reveal step is pending.
pub const IDLE_POLL: Duration = Duration::from_millis(250);

/// How a playback session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackResult {
    /// The user quit after the last message was fully revealed
    Finished,
    /// The user quit before the end of the story
    Interrupted,
}

/// Time to wait for input before the next reveal step is due.
pub fn poll_timeout(next_due: Option<Instant>, now: Instant) -> Duration {
    next_due
        .map(|due| due.saturating_duration_since(now))
        .unwrap_or(IDLE_POLL)
        .min(IDLE_POLL)
}

/// Play `story` in the terminal until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn play_story(story: Story, options: &PlaybackOptions) -> Result<PlaybackResult> {
    tracing::info!(
        title = story.title(),
        messages = story.len(),
        typing_speed_ms = options.typing_speed.as_millis() as u64,
        "Starting playback"
    );

    let mut app = App::new()?;
    let mut state = PlaybackState::new(story, options.typing_speed);
    if options.auto_start {
        state.advance(Instant::now());
    }

    loop {
        if state.needs_render {
            app.draw(|frame| render_frame(frame, &mut state, &options.cursor_marker))?;
            state.needs_render = false;
        }

        let timeout = poll_timeout(state.next_due(), Instant::now());
        if let Some(event) = app.poll_event(timeout)? {
            if handle_event(event, &mut state, Instant::now()) == InputResult::Quit {
                break;
            }
        }

        state.tick(Instant::now());
    }

    let result = if state.is_finished() {
        PlaybackResult::Finished
    } else {
        PlaybackResult::Interrupted
    };
    tracing::info!(shown = state.cursor(), ?result, "Playback ended");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_timeout_waits_until_next_step() {
        let now = Instant::now();
        let due = now + Duration::from_millis(7);
        assert_eq!(poll_timeout(Some(due), now), Duration::from_millis(7));
    }

    #[test]
    fn poll_timeout_is_zero_when_overdue() {
        let now = Instant::now();
        assert_eq!(poll_timeout(Some(now), now + Duration::from_millis(5)), Duration::ZERO);
    }

    #[test]
    fn poll_timeout_caps_at_idle() {
        let now = Instant::now();
        assert_eq!(poll_timeout(None, now), IDLE_POLL);
        assert_eq!(
            poll_timeout(Some(now + Duration::from_secs(10)), now),
            IDLE_POLL
        );
    }
}
