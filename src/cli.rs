//! CLI definitions for storyterm
//!
//! Lives in the library so completions can be generated from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Version string with build info.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("STORYTERM_BUILD_DATE"),
    ")"
);

/// Version string with build info (no git SHA in release builds).
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("STORYTERM_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(name = "storyterm")]
#[command(version = VERSION)]
#[command(about = "Reveal a scripted story in a simulated terminal, one character at a time")]
#[command(long_about = "Reveal a scripted story in a simulated terminal.

Each message is typed out character by character. Press Enter or click the
terminal to show the next message, Space to finish the current one, and q
to quit.

When stdout is not a terminal the story is written as plain text and each
line on stdin advances to the next message.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Options for the default `play` command
    #[command(flatten)]
    pub play: PlayArgs,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a story (default)
    Play(PlayArgs),

    /// Validate a story file and summarize its messages
    Check {
        /// Story file (.toml or .json)
        path: PathBuf,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct PlayArgs {
    /// Story file to play instead of the built-in story
    #[arg(short, long, value_name = "PATH")]
    pub story: Option<PathBuf>,

    /// Delay between characters in milliseconds
    #[arg(long, value_name = "MS")]
    pub speed: Option<u64>,

    /// Write plain text instead of opening the terminal UI
    #[arg(long)]
    pub plain: bool,

    /// Color theme (phosphor, amber, classic)
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
