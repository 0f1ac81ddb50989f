//! UI layout helpers for the TUI
//!
//! Splits the screen into the terminal panel and the footer bar.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Widest the terminal panel gets on large screens.
pub const MAX_PANEL_WIDTH: u16 = 100;

/// Center a column of at most `max_width` cells horizontally in `area`.
pub fn centered_width(max_width: u16, area: Rect) -> Rect {
    let [center] = Layout::horizontal([Constraint::Max(max_width)])
        .flex(Flex::Center)
        .areas(area);
    center
}

/// Split the frame into `(panel, footer)`.
///
/// The footer takes the bottom row; the panel fills the rest and is
/// centered when the screen is wider than [`MAX_PANEL_WIDTH`].
pub fn player_layout(area: Rect) -> (Rect, Rect) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);
    let panel = centered_width(MAX_PANEL_WIDTH, body);
    let footer = centered_width(MAX_PANEL_WIDTH, footer);
    (panel, footer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_width_keeps_narrow_area() {
        let area = Rect::new(0, 0, 60, 20);
        assert_eq!(centered_width(100, area), area);
    }

    #[test]
    fn centered_width_centers_wide_area() {
        let area = Rect::new(0, 0, 140, 20);
        let centered = centered_width(100, area);

        assert_eq!(centered.width, 100);
        assert_eq!(centered.x, 20);
        assert_eq!(centered.height, 20);
    }

    #[test]
    fn player_layout_reserves_footer_row() {
        let (panel, footer) = player_layout(Rect::new(0, 0, 80, 24));

        assert_eq!(panel, Rect::new(0, 0, 80, 23));
        assert_eq!(footer, Rect::new(0, 23, 80, 1));
    }
}
