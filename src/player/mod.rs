//! Story player module
//!
//! Reveals a story one message at a time with a typewriter effect.
//!
//! # Architecture
//!
//! - `state`: `PlaybackState` (cursor, current reveal, display) and shared types
//! - `reveal`: the per-message typewriter state machine
//! - `display`: the text surface the reveal writes into
//! - `input/`: keyboard and mouse handling
//! - `render/`: terminal panel and footer widgets
//! - `native`: the full-screen TUI event loop
//! - `plain`: line-driven playback for non-interactive output
//!
//! # Usage
//!
//! ```no_run
//! use storyterm::player::{play_story, PlaybackOptions, PlaybackResult};
//! use storyterm::story::Story;
//!
//! let result = play_story(Story::builtin(), &PlaybackOptions::default()).unwrap();
//! if result == PlaybackResult::Interrupted {
//!     println!("Stopped early");
//! }
//! ```

pub mod display;
pub(crate) mod input;
mod native;
mod plain;
pub mod render;
pub mod reveal;
pub mod state;

pub use display::Display;
pub use native::{play_story, poll_timeout, PlaybackResult};
pub use plain::play_plain;
pub use reveal::{Reveal, RevealState};
pub use state::{InputResult, PlaybackOptions, PlaybackState};
