//! Rendering components for the player.
//!
//! This module contains the UI rendering functions for the player: the
//! terminal panel holding the story text and the footer bar.

mod footer;
mod panel;

pub use footer::{build_footer_spans, footer_keys, progress_label, render_footer};
pub use panel::{build_panel_lines, render_panel, wrap_text};

use ratatui::Frame;

use crate::player::state::PlaybackState;
use crate::tui::{current_theme, ui::player_layout};

/// Render a full frame and record the panel area for mouse hit-testing.
pub fn render_frame(frame: &mut Frame, state: &mut PlaybackState, marker: &str) {
    let theme = current_theme();
    let (panel_area, footer_area) = player_layout(frame.area());
    state.panel_area = panel_area;

    render_panel(
        frame,
        panel_area,
        state.story().title(),
        state.display(),
        marker,
        &theme,
    );
    render_footer(frame, footer_area, state, &theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::Story;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::{Duration, Instant};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn render_frame_shows_revealed_text_marker_and_progress() {
        let mut state = PlaybackState::new(Story::new("Demo", ["hello world", "b"]), Duration::ZERO);
        let now = Instant::now();
        state.advance(now);
        state.finish();

        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|frame| render_frame(frame, &mut state, "█"))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("hello world█"), "{}", text);
        assert!(text.contains(" Demo "));
        assert!(text.contains("1/2"));
        assert!(text.contains("enter/click: next"));
    }

    #[test]
    fn render_frame_records_panel_area() {
        let mut state = PlaybackState::new(Story::new("t", ["x"]), Duration::ZERO);
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();

        terminal
            .draw(|frame| render_frame(frame, &mut state, "█"))
            .unwrap();

        assert_eq!(state.panel_area.height, 11);
        assert_eq!(state.panel_area.width, 40);
        assert!(state.panel_contains(0, 0));
        assert!(!state.panel_contains(0, 11));
    }
}
