//! Terminal lifecycle for the TUI
//!
//! `App` owns the ratatui terminal. Creating it switches the terminal into
//! raw mode on the alternate screen with mouse capture; dropping it (or a
//! panic) restores the original state.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

/// Base app for terminal handling.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

#[cfg(not(tarpaulin_include))]
impl App {
    /// Take over the terminal.
    pub fn new() -> Result<Self> {
        install_panic_hook();

        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        restore_on_err(
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide),
            discard_restore,
        )
        .context("Failed to enter alternate screen")?;

        let terminal = restore_on_err(
            Terminal::new(CrosstermBackend::new(stdout)),
            discard_restore,
        )
        .context("Failed to create terminal")?;
        tracing::debug!("Terminal initialized");

        Ok(Self { terminal })
    }

    /// Draw a frame.
    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Wait up to `timeout` for an input event.
    pub fn poll_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

#[cfg(not(tarpaulin_include))]
impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal() {
            tracing::warn!("Failed to restore terminal: {}", e);
        }
    }
}

/// Leave raw mode and the alternate screen.
#[cfg(not(tarpaulin_include))]
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show)
}

/// Run `restore` if `result` is an error, then pass the result through.
///
/// Setup steps after `enable_raw_mode` go through this: `App` does not
/// exist yet, so its `Drop` cannot undo a half-finished setup.
pub fn restore_on_err<T, E>(result: Result<T, E>, restore: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        restore();
    }
    result
}

#[cfg(not(tarpaulin_include))]
fn discard_restore() {
    let _ = restore_terminal();
}

/// Restore the terminal before the default panic message is printed.
#[cfg(not(tarpaulin_include))]
fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original(info);
    }));
}
