//! # Bionic Reader
//!
//! Converts text into bionic reading form: the first part of every word is
//! emphasized to guide the eye.
//!
//! ## Features
//! - One-shot conversion from an argument, a file, or stdin
//! - Plain, ANSI, HTML, Markdown and JSON output
//! - Interactive terminal UI with an adjustable bold fraction
//! - Configuration via environment, `.env`, and saved settings

mod cli;
mod run;
mod tui;

use bionic_reader::core;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    if let Some(Commands::Completions { shell }) = args.command {
        let mut cmd = Args::command();
        cli::generate(shell, &mut cmd, core::app::NAME, &mut std::io::stdout());
        return Ok(());
    }

    // Print user-friendly message; exit uses Display not Debug
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let config = run::apply_overrides(config, &args);

    if let Some(Commands::Config) = args.command {
        core::cli::run_config(&config);
        return Ok(());
    }

    if run::wants_tui(&args) {
        return run::launch_tui(config);
    }

    if let Err(e) = run::run_convert(&args, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
