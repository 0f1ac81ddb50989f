//! Plain-text playback through the binary

use predicates::prelude::*;

use super::helpers::{storyterm, write_file, SHORT_STORY};

#[test]
fn plain_mode_shows_first_message_and_stops_on_eof() {
    let (dir, mut cmd) = storyterm();
    let story = write_file(&dir, "short.toml", SHORT_STORY);

    cmd.args(["--plain", "--speed", "0", "--story"])
        .arg(&story)
        .write_stdin("")
        .assert()
        .success()
        .stdout("First screen.█\n")
        .stdout(predicate::str::contains("Second screen.").not());
}

#[test]
fn plain_mode_advances_once_per_input_line() {
    let (dir, mut cmd) = storyterm();
    let story = write_file(&dir, "short.toml", SHORT_STORY);

    cmd.args(["--plain", "--speed", "0", "--story"])
        .arg(&story)
        .write_stdin("\n\n")
        .assert()
        .success()
        .stdout("First screen.█\n\nSecond screen.\n\nStill second.█\n\nLast screen.█\n");
}

#[test]
fn advancing_past_the_end_is_not_an_error() {
    let (dir, mut cmd) = storyterm();
    let story = write_file(&dir, "short.toml", SHORT_STORY);

    cmd.args(["play", "--plain", "--speed", "0", "--story"])
        .arg(&story)
        .write_stdin("\n\n\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Last screen.█\n"))
        .stderr("");
}

#[test]
fn marker_from_config_file_is_used() {
    let (dir, mut cmd) = storyterm();
    let story = write_file(&dir, "short.toml", SHORT_STORY);
    write_file(&dir, "config.toml", "[playback]\ncursor_marker = \"_\"\n");

    cmd.args(["--plain", "--speed", "0", "--story"])
        .arg(&story)
        .write_stdin("")
        .assert()
        .success()
        .stdout("First screen._\n");
}

#[test]
fn builtin_story_plays_to_the_end() {
    let (_dir, mut cmd) = storyterm();

    cmd.args(["--plain", "--speed", "0"])
        .write_stdin("\n\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("It's 2029."))
        .stdout(predicate::str::contains("Approximately 0.7 seconds later"))
        .stdout(predicate::str::contains("reflected back into space by a large mirror"));
}

#[test]
fn config_file_speed_and_story_are_used() {
    let (dir, mut cmd) = storyterm();
    let story = write_file(&dir, "short.toml", SHORT_STORY);
    write_file(
        &dir,
        "config.toml",
        &format!(
            "[playback]\ntyping_speed_ms = 0\n\n[story]\npath = {:?}\n",
            story.display().to_string()
        ),
    );

    cmd.arg("--plain")
        .write_stdin("")
        .assert()
        .success()
        .stdout("First screen.█\n");
}

#[test]
fn missing_story_file_fails_with_message() {
    let (dir, mut cmd) = storyterm();

    cmd.args(["--plain", "--story"])
        .arg(dir.path().join("missing.toml"))
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read story file"));
}

#[test]
fn unknown_theme_fails() {
    let (_dir, mut cmd) = storyterm();

    cmd.args(["--plain", "--theme", "neon"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown theme 'neon'"));
}
