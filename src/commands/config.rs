//! Config subcommands handler

use anyhow::Result;

use storyterm::tui::current_theme;
use storyterm::Config;

/// Show current configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&config.to_toml()?));
    Ok(())
}

/// Print the config file location.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write a default config file.
pub fn handle_init(force: bool) -> Result<()> {
    let theme = current_theme();
    let config_path = Config::config_path()?;

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file {} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to(&config_path)?;
    println!(
        "{}",
        theme.success_text(&format!("Wrote {}", config_path.display()))
    );
    Ok(())
}
