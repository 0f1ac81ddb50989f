//! Check command handler

use std::path::Path;

use anyhow::Result;

use storyterm::tui::current_theme;
use storyterm::Story;

/// Longest headline shown per message.
const HEADLINE_WIDTH: usize = 60;

/// Validate a story file and print one line per message.
pub fn handle(path: &Path) -> Result<()> {
    let story = Story::load(path)?;
    let theme = current_theme();

    println!(
        "{}",
        theme.success_text(&format!(
            "{}: {} message(s)",
            path.display(),
            story.len()
        ))
    );
    if !story.title().is_empty() {
        println!("{}", theme.primary_text(&format!("Title: {}", story.title())));
    }

    for (i, message) in story.iter().enumerate() {
        println!(
            "{} {} {}",
            theme.accent_text(&format!("{:>3}.", i + 1)),
            truncate(message.headline(), HEADLINE_WIDTH),
            theme.secondary_text(&format!("({} chars)", message.char_count()))
        );
    }

    Ok(())
}

/// Shorten `text` to at most `max` characters, marking the cut with `...`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}
