//! Story (message store) module
//!
//! A story is an ordered, immutable sequence of messages. Each message is
//! one "screen" of narrative text revealed by the player as a unit.
//!
//! Stories come either from the built-in script or from a story file:
//!
//! ```toml
//! title = "My story"
//! messages = [
//!     "First screen.\n\nPress enter to continue.",
//!     "Second screen.",
//! ]
//! ```
//!
//! Files ending in `.json` are parsed as JSON with the same shape.

mod builtin;
mod error;

pub use error::StoryError;

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// A single block of narrative text.
///
/// Message text is opaque: characters (including newlines) are passed
/// through to the display unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters the typewriter will reveal.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// First non-blank line of the message, trimmed.
    ///
    /// Used for story summaries; returns an empty string for blank messages.
    pub fn headline(&self) -> &str {
        self.text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// On-disk story file layout.
#[derive(Debug, Deserialize)]
struct StoryFile {
    #[serde(default)]
    title: Option<String>,
    messages: Vec<String>,
}

/// Ordered, fixed sequence of messages.
#[derive(Debug, Clone)]
pub struct Story {
    title: String,
    messages: Vec<Message>,
}

impl Story {
    /// Build a story from an explicit list of messages.
    pub fn new<I, M>(title: impl Into<String>, messages: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Message>,
    {
        Self {
            title: title.into(),
            messages: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// The story compiled into the binary.
    pub fn builtin() -> Self {
        Self::new(builtin::TITLE, builtin::MESSAGES)
    }

    /// Load a story file.
    ///
    /// `.json` files are parsed as JSON, anything else as TOML. A story
    /// without messages is rejected.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| StoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let file: StoryFile = if is_json {
            serde_json::from_str(&content).map_err(|e| StoryError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        } else {
            toml::from_str(&content).map_err(|e| StoryError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        if file.messages.is_empty() {
            return Err(StoryError::Empty {
                path: path.to_path_buf(),
            });
        }

        let title = file.title.unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default()
        });

        tracing::debug!(
            path = %path.display(),
            messages = file.messages.len(),
            "Loaded story file"
        );

        Ok(Self::new(title, file.messages.iter().map(String::as_str)))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Message at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }
}
