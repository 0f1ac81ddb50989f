//! `storyterm check` tests

use predicates::prelude::*;

use super::helpers::{storyterm, write_file, SHORT_STORY};

#[test]
fn check_summarizes_valid_story() {
    let (dir, mut cmd) = storyterm();
    let story = write_file(&dir, "short.toml", SHORT_STORY);

    cmd.arg("check")
        .arg(&story)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 message(s)"))
        .stdout(predicate::str::contains("Title: Short"))
        .stdout(predicate::str::contains("Second screen."));
}

#[test]
fn check_accepts_json_story() {
    let (dir, mut cmd) = storyterm();
    let story = write_file(&dir, "story.json", r#"{"messages": ["only one"]}"#);

    cmd.arg("check")
        .arg(&story)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 message(s)"))
        .stdout(predicate::str::contains("only one"));
}

#[test]
fn check_rejects_empty_story() {
    let (dir, mut cmd) = storyterm();
    let story = write_file(&dir, "empty.toml", "messages = []\n");

    cmd.arg("check")
        .arg(&story)
        .assert()
        .failure()
        .stderr(predicate::str::contains("contains no messages"));
}

#[test]
fn check_rejects_malformed_story() {
    let (dir, mut cmd) = storyterm();
    let story = write_file(&dir, "bad.toml", "messages = \"not a list\"\n");

    cmd.arg("check")
        .arg(&story)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse story file"));
}

#[test]
fn check_uses_theme_from_config() {
    let (dir, mut cmd) = storyterm();
    let story = write_file(&dir, "short.toml", SHORT_STORY);
    write_file(&dir, "config.toml", "[ui]\ntheme = \"amber\"\n");

    // Amber accent (light yellow) on the message numbers
    cmd.arg("check")
        .arg(&story)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[93m  1."));
}
