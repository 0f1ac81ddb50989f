//! The display surface of the simulated terminal.
//!
//! Holds the revealed text and whether the cursor marker has been
//! appended after it. The marker is kept as a flag rather than inline
//! text so the renderer can style it separately.

/// Text revealed so far plus the trailing cursor marker flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Display {
    text: String,
    marker: bool,
}

impl Display {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all content, including the marker.
    pub fn clear(&mut self) {
        self.text.clear();
        self.marker = false;
    }

    /// Append a single revealed character.
    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Append the cursor marker after the revealed text.
    pub fn show_marker(&mut self) {
        self.marker = true;
    }

    /// Revealed text, without the marker.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_marker(&self) -> bool {
        self.marker
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && !self.marker
    }

    /// Full surface content with the marker rendered as `marker`.
    pub fn contents(&self, marker: &str) -> String {
        let mut out = String::with_capacity(self.text.len() + marker.len());
        out.push_str(&self.text);
        if self.marker {
            out.push_str(marker);
        }
        out
    }
}
