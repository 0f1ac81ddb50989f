//! Plain-text player.
//!
//! Used when stdout is not a terminal (or with `--plain`). Characters are
//! written straight to the output at the typing speed; each line read from
//! the input advances to the next message. Input EOF ends playback after
//! the message being shown. A fully revealed message ends with the cursor
//! marker, as in the terminal UI.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Instant;

use anyhow::Result;

use crate::player::state::{PlaybackOptions, PlaybackState};
use crate::story::Story;

/// Play `story` as plain text.
///
/// Returns the number of messages shown.
pub fn play_plain<R, W>(
    story: Story,
    options: &PlaybackOptions,
    input: R,
    mut output: W,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut state = PlaybackState::new(story, options.typing_speed);
    let mut lines = input.lines();

    if !options.auto_start && lines.next().transpose()?.is_none() {
        return Ok(0);
    }
    state.advance(Instant::now());

    loop {
        type_out(&mut state, &mut output)?;
        if state.display().has_marker() {
            write!(output, "{}", options.cursor_marker)?;
        }
        writeln!(output)?;
        output.flush()?;

        if state.cursor() >= state.story().len() {
            break;
        }
        match lines.next().transpose()? {
            Some(_) => {
                writeln!(output)?;
                state.advance(Instant::now());
            }
            None => break,
        }
    }

    tracing::info!(shown = state.cursor(), "Plain playback ended");
    Ok(state.cursor())
}

/// Write the current reveal to `output`, sleeping between characters.
fn type_out<W: Write>(state: &mut PlaybackState, output: &mut W) -> Result<()> {
    while let Some(due) = state.next_due() {
        let now = Instant::now();
        if due > now {
            thread::sleep(due - now);
        }
        if let Some(ch) = state.tick(Instant::now()) {
            write!(output, "{}", ch)?;
            output.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::Duration;

    fn options() -> PlaybackOptions {
        PlaybackOptions {
            typing_speed: Duration::ZERO,
            ..PlaybackOptions::default()
        }
    }

    fn run(story: Story, options: &PlaybackOptions, input: &str) -> (usize, String) {
        let mut out = Vec::new();
        let shown = play_plain(story, options, Cursor::new(input.to_string()), &mut out).unwrap();
        (shown, String::from_utf8(out).unwrap())
    }

    #[test]
    fn eof_stops_after_first_message() {
        let (shown, out) = run(Story::new("t", ["one", "two"]), &options(), "");
        assert_eq!(shown, 1);
        assert_eq!(out, "one█\n");
    }

    #[test]
    fn each_line_advances() {
        let (shown, out) = run(Story::new("t", ["one", "two", "three"]), &options(), "\n\n");
        assert_eq!(shown, 3);
        assert_eq!(out, "one█\n\ntwo█\n\nthree█\n");
    }

    #[test]
    fn extra_input_after_last_message_is_ignored() {
        let (shown, out) = run(Story::new("t", ["one"]), &options(), "\n\n\n");
        assert_eq!(shown, 1);
        assert_eq!(out, "one█\n");
    }

    #[test]
    fn without_auto_start_first_line_starts_story() {
        let options = PlaybackOptions {
            auto_start: false,
            ..options()
        };

        let (shown, out) = run(Story::new("t", ["one", "two"]), &options, "");
        assert_eq!(shown, 0);
        assert_eq!(out, "");

        let (shown, out) = run(Story::new("t", ["one", "two"]), &options, "\n");
        assert_eq!(shown, 1);
        assert_eq!(out, "one█\n");
    }

    #[test]
    fn configured_marker_ends_each_message() {
        let options = PlaybackOptions {
            cursor_marker: "_".to_string(),
            ..options()
        };

        let (_, out) = run(Story::new("t", ["ab", "c"]), &options, "\n");
        assert_eq!(out, "ab_\n\nc_\n");
    }

    #[test]
    fn empty_message_prints_blank_screen() {
        let (shown, out) = run(Story::new("t", ["", "x"]), &options(), "\n");
        assert_eq!(shown, 2);
        assert_eq!(out, "█\n\nx█\n");
    }
}
