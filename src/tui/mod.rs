//! TUI (Text User Interface) module for storyterm
//!
//! Terminal lifecycle, layout helpers and the color theme shared by the
//! player and the CLI output.

pub mod app;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{current_theme, set_theme, Theme};
