//! storyterm - typewriter story player
//!
//! Reveals a fixed sequence of story messages in a simulated terminal,
//! one character at a time, advancing on Enter or a click.

pub mod cli;
pub mod config;
pub mod logging;
pub mod player;
pub mod story;
pub mod tui;

pub use config::Config;
pub use player::{PlaybackOptions, PlaybackState};
pub use story::{Message, Story, StoryError};
