//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// `storyterm` command isolated from the user's config file.
///
/// The returned directory must outlive the command.
pub fn storyterm() -> (TempDir, Command) {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mut cmd = Command::cargo_bin("storyterm").expect("binary built");
    cmd.env("STORYTERM_CONFIG", temp_dir.path().join("config.toml"));
    cmd.env_remove("STORYTERM_LOG");
    (temp_dir, cmd)
}

/// Write `content` to `name` inside `dir`, returning the path.
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

/// A three-message TOML story.
pub const SHORT_STORY: &str = r#"
title = "Short"
messages = [
    "First screen.",
    "Second screen.\n\nStill second.",
    "Last screen.",
]
"#;
