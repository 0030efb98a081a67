//! Application run modes: logger init, one-shot conversion, TUI launch.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use crate::cli::Args;
use crate::core;
use crate::core::config::Config;

/// Errors collecting the text to convert.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("please enter some text")]
    Blank,
    #[error("failed to read {}: {source}", path.display())]
    File { path: PathBuf, source: io::Error },
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
}

/// True when no input was given and stdin is interactive, or `tui` was requested.
pub fn wants_tui(args: &Args) -> bool {
    match args.command {
        Some(crate::cli::Commands::Tui) => true,
        Some(_) => false,
        None => !args.has_input() && io::stdin().is_terminal(),
    }
}

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if wants_tui(args)
        && let Some(path) = core::paths::log_file()
    {
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        if let Ok(file) = fs::OpenOptions::new().create(true).append(true).open(&path) {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Apply CLI overrides on top of the loaded configuration.
pub fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(f) = args.fraction {
        config.bold_fraction = f;
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    if let Some(w) = args.width {
        config.width = Some(usize::from(w));
    }
    config
}

/// Collect the document from the file, the text argument, or stdin. Blank input is rejected.
pub fn read_input(args: &Args) -> Result<String, InputError> {
    let text = if let Some(path) = &args.file {
        fs::read_to_string(path).map_err(|source| InputError::File {
            path: path.clone(),
            source,
        })?
    } else {
        match args.text.as_deref() {
            Some("-") | None => io::read_to_string(io::stdin()).map_err(InputError::Stdin)?,
            Some(text) => text.to_string(),
        }
    };
    if text.trim().is_empty() {
        return Err(InputError::Blank);
    }
    Ok(text)
}

/// One-shot mode: transform the input and print it in the configured format.
pub fn run_convert(args: &Args, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(args)?;
    let doc = core::bionic::transform(&text, config.bold_fraction);
    log::info!(
        "Transformed {} paragraph(s), {} word(s) at fraction {}",
        doc.paragraphs.len(),
        doc.word_count(),
        config.bold_fraction
    );
    let out = core::render::render(&doc, config.format, config.width);

    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    if !out.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

/// Launch the TUI with the configured fraction.
pub fn launch_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    crate::tui::run(config)?;
    Ok(())
}
