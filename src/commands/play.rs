//! Play command handler

use std::io;
use std::time::Duration;

use anyhow::{anyhow, Result};

use storyterm::cli::PlayArgs;
use storyterm::logging::init_logging;
use storyterm::player::{play_plain, play_story, PlaybackResult};
use storyterm::tui::{set_theme, Theme};
use storyterm::{Config, Story};

/// Play the configured (or given) story.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: PlayArgs) -> Result<()> {
    let config = Config::load()?;
    let _log_guard = init_logging(&config.logging)?;

    let theme_name = args.theme.as_deref().unwrap_or(&config.ui.theme);
    let theme = Theme::by_name(theme_name).ok_or_else(|| {
        anyhow!(
            "Unknown theme '{}' (expected one of: {})",
            theme_name,
            Theme::NAMES.join(", ")
        )
    })?;
    set_theme(theme);

    let story = match args.story.as_ref().or(config.story.path.as_ref()) {
        Some(path) => Story::load(path)?,
        None => Story::builtin(),
    };

    let mut options = config.playback_options();
    if let Some(ms) = args.speed {
        options.typing_speed = Duration::from_millis(ms);
    }

    if args.plain || !atty::is(atty::Stream::Stdout) {
        tracing::info!(messages = story.len(), "Starting plain playback");
        play_plain(story, &options, io::stdin().lock(), io::stdout().lock())?;
        return Ok(());
    }

    match play_story(story, &options)? {
        PlaybackResult::Finished => tracing::debug!("Story finished"),
        PlaybackResult::Interrupted => tracing::debug!("Story interrupted"),
    }
    Ok(())
}
