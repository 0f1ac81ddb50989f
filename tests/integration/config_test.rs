//! `storyterm config` and `completions` tests

use std::fs;

use predicates::prelude::*;

use super::helpers::storyterm;

#[test]
fn config_show_prints_defaults_without_file() {
    let (_dir, mut cmd) = storyterm();

    cmd.args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("typing_speed_ms = 10"))
        .stdout(predicate::str::contains("theme = \"phosphor\""));
}

#[test]
fn config_show_uses_configured_theme() {
    let (dir, mut cmd) = storyterm();
    fs::write(dir.path().join("config.toml"), "[ui]\ntheme = \"classic\"\n").unwrap();

    // Classic primary text is white
    cmd.args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1b[97m"))
        .stdout(predicate::str::contains("theme = \"classic\""));
}

#[test]
fn config_path_honors_override() {
    let (dir, mut cmd) = storyterm();
    let expected = dir.path().join("config.toml");

    cmd.args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", expected.display()));
}

#[test]
fn config_init_writes_file_once() {
    let (dir, mut cmd) = storyterm();
    let path = dir.path().join("config.toml");

    cmd.args(["config", "init"]).assert().success();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[playback]"));

    let mut again = assert_cmd::Command::cargo_bin("storyterm").unwrap();
    again
        .env("STORYTERM_CONFIG", &path)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let mut forced = assert_cmd::Command::cargo_bin("storyterm").unwrap();
    forced
        .env("STORYTERM_CONFIG", &path)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn completions_are_generated() {
    let (_dir, mut cmd) = storyterm();

    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("storyterm"));
}
