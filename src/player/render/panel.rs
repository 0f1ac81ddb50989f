//! Terminal panel rendering.
//!
//! Draws the display surface inside a bordered panel. Text is hard-wrapped
//! to the panel width by display width and scrolled so the newest line is
//! always visible. The cursor marker is styled separately so it can blink.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::player::display::Display;
use crate::tui::Theme;

/// Hard-wrap `text` into lines no wider than `width` columns.
///
/// Newlines always start a new line, so blank lines are preserved.
/// Returns no lines when `width` is zero.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for ch in raw.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width + ch_width > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
        lines.push(current);
    }
    lines
}

/// Build the visible lines of the panel.
///
/// Only the last `height` wrapped lines are kept. When the marker is shown
/// and ends the last line it is split into its own styled span.
pub fn build_panel_lines(
    display: &Display,
    marker: &str,
    width: usize,
    height: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let wrapped = wrap_text(&display.contents(marker), width);
    let skip = wrapped.len().saturating_sub(height);
    let visible = &wrapped[skip..];

    let last = visible.len().saturating_sub(1);
    visible
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == last && display.has_marker() && !marker.is_empty() {
                if let Some(text) = line.strip_suffix(marker) {
                    return Line::from(vec![
                        Span::styled(text.to_string(), theme.text_style()),
                        Span::styled(marker.to_string(), theme.cursor_style()),
                    ]);
                }
            }
            Line::from(Span::styled(line.clone(), theme.text_style()))
        })
        .collect()
}

/// Render the terminal panel into `area`.
pub fn render_panel(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    display: &Display,
    marker: &str,
    theme: &Theme,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style());
    if !title.is_empty() {
        block = block.title(Span::styled(
            format!(" {} ", title),
            theme.text_secondary_style(),
        ));
    }

    let inner = block.inner(area);
    let lines = build_panel_lines(
        display,
        marker,
        inner.width as usize,
        inner.height as usize,
        theme,
    );

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
