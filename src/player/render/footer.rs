//! Footer rendering: key hints on the left, story progress on the right.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::player::state::PlaybackState;
use crate::tui::Theme;

/// Key hints for the current playback phase.
pub fn footer_keys(state: &PlaybackState) -> &'static [(&'static str, &'static str)] {
    if state.is_finished() {
        &[("q", "quit")]
    } else if state.is_revealing() {
        &[("space", "skip"), ("enter/click", "next"), ("q", "quit")]
    } else {
        &[("enter/click", "next"), ("q", "quit")]
    }
}

/// Progress label, e.g. `3/6`.
pub fn progress_label(state: &PlaybackState) -> String {
    format!("{}/{}", state.cursor(), state.story().len())
}

/// Build styled spans for footer keybinding hints.
///
/// Each key is highlighted with the theme accent color, descriptions use
/// the secondary text color, and entries are separated by " | ".
pub fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " | ".to_string(),
                Style::default().fg(theme.text_secondary),
            ));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(theme.accent)));
        spans.push(Span::styled(
            format!(": {}", desc),
            Style::default().fg(theme.text_secondary),
        ));
    }
    spans
}

/// Render the footer bar.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &PlaybackState, theme: &Theme) {
    let progress = progress_label(state);
    let [hints_area, progress_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(progress.len() as u16 + 1),
    ])
    .areas(area);

    let mut spans = Vec::new();
    if state.is_finished() {
        spans.push(Span::styled(
            "end of story | ".to_string(),
            theme.text_secondary_style(),
        ));
    }
    spans.extend(build_footer_spans(footer_keys(state), theme));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Left),
        hints_area,
    );
    frame.render_widget(
        Paragraph::new(progress)
            .style(theme.text_secondary_style())
            .alignment(Alignment::Right),
        progress_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::Story;
    use std::time::{Duration, Instant};

    #[test]
    fn footer_spans_join_keys_with_separator() {
        let theme = Theme::phosphor();
        let spans = build_footer_spans(&[("q", "quit"), ("space", "skip")], &theme);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();

        assert_eq!(text, "q: quit | space: skip");
        assert_eq!(spans[0].style.fg, Some(theme.accent));
    }

    #[test]
    fn footer_keys_follow_playback_phase() {
        let mut state = PlaybackState::new(Story::new("t", ["ab"]), Duration::from_millis(10));
        assert_eq!(footer_keys(&state)[0].0, "enter/click");

        let now = Instant::now();
        state.advance(now);
        assert_eq!(footer_keys(&state)[0].0, "space");

        state.finish();
        assert_eq!(footer_keys(&state), &[("q", "quit")]);
    }

    #[test]
    fn progress_label_counts_shown_messages() {
        let mut state = PlaybackState::new(Story::new("t", ["a", "b", "c"]), Duration::ZERO);
        assert_eq!(progress_label(&state), "0/3");
        state.advance(Instant::now());
        assert_eq!(progress_label(&state), "1/3");
    }
}
