//! storyterm binary entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use storyterm::cli::{Cli, Commands, ConfigCommands};
use storyterm::tui::{current_theme, set_theme};
use storyterm::Config;

fn main() {
    if let Err(e) = run() {
        let theme = current_theme();
        eprintln!("{}", theme.error_text(&format!("Error: {:#}", e)));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // `play` installs its own theme so `--theme` can override the config.
    let is_play = matches!(cli.command, None | Some(Commands::Play(_)));
    if !is_play {
        install_config_theme();
    }

    match cli.command {
        None => commands::play::handle(cli.play),
        Some(Commands::Play(args)) => commands::play::handle(args),
        Some(Commands::Check { path }) => commands::check::handle(&path),
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Some(Commands::Completions { shell }) => commands::completions::handle(shell),
    }
}

/// Use the configured theme for CLI output.
///
/// A broken config falls back to the default theme here; commands that
/// need the config report the error themselves.
fn install_config_theme() {
    if let Ok(config) = Config::load() {
        set_theme(config.theme());
    }
}
