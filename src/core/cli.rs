//! CLI-only commands: config info.
//!
//! These run without opening the TUI and produce plain text output.

use crate::core::app;
use crate::core::config::Config;
use crate::core::paths;
use crate::core::persistence;

/// Run the `config` command: display paths and the effective settings.
pub fn run_config(config: &Config) {
    let config_dir = paths::config_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());
    let saved = persistence::fraction_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());
    let log_file = paths::log_file()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());
    let width = config
        .width
        .map(|w| w.to_string())
        .unwrap_or_else(|| "none".to_string());

    println!("Version:      {} {}", app::NAME, app::VERSION);
    println!("Config:       {}", config_dir);
    println!("Saved value:  {}", saved);
    println!("Log file:     {}", log_file);
    println!(
        "Fraction:     {} ({})",
        config.bold_fraction,
        config.fraction_source.describe()
    );
    println!("Format:       {}", config.format);
    println!("Width:        {}", width);
}
