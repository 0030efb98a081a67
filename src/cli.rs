//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::core::bionic::BoldFraction;
use crate::core::config::parse_fraction;
use crate::core::render::OutputFormat;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  bionic-reader                         Launch interactive TUI
  bionic-reader \"Speed up reading\"      Convert text, print to stdout
  bionic-reader -f notes.txt -o html    Convert a file to HTML
  cat notes.txt | bionic-reader -r 0.5  Read from stdin with a custom bold fraction
  bionic-reader config                  Show config paths and effective settings
  bionic-reader completions bash        Generate bash completions

ENVIRONMENT:
  BIONIC_FRACTION   Default bold fraction (0-1)
  BIONIC_FORMAT     Default output format
  BIONIC_WIDTH      Default wrap width
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Bionic reading converter: bold the first part of every word",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Text to convert ('-' reads from stdin)
    pub text: Option<String>,

    /// Read the text to convert from a file
    #[arg(short = 'f', long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Share of each word to emphasize
    #[arg(
        short = 'r',
        long,
        value_parser = fraction_arg,
        help = "Bold fraction between 0 and 1 (settings panel range: 0.1-0.7)"
    )]
    pub fraction: Option<BoldFraction>,

    /// Output format
    #[arg(short = 'o', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Wrap plain, ansi and markdown output to this many columns
    #[arg(short = 'w', long, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive reader
    Tui,
    /// Show config paths and effective settings
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

fn fraction_arg(s: &str) -> Result<BoldFraction, String> {
    parse_fraction(s).ok_or_else(|| format!("'{}' is not a number between 0 and 1", s))
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// True when some input source was given on the command line.
    pub fn has_input(&self) -> bool {
        self.text.is_some() || self.file.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{Args, Commands};
    use crate::core::bionic::BoldFraction;
    use crate::core::render::OutputFormat;
    use clap::Parser;

    #[test]
    fn parses_text_and_options() {
        let args =
            Args::try_parse_from(["bionic-reader", "-r", "0.5", "-o", "html", "-w", "40", "hi"])
                .unwrap();
        assert_eq!(args.text.as_deref(), Some("hi"));
        assert_eq!(args.fraction, Some(BoldFraction::new(0.5)));
        assert_eq!(args.format, Some(OutputFormat::Html));
        assert_eq!(args.width, Some(40));
        assert!(args.has_input());
    }

    #[test]
    fn rejects_out_of_range_fraction() {
        assert!(Args::try_parse_from(["bionic-reader", "-r", "1.5", "hi"]).is_err());
        assert!(Args::try_parse_from(["bionic-reader", "-r", "x", "hi"]).is_err());
    }

    #[test]
    fn file_conflicts_with_text() {
        assert!(Args::try_parse_from(["bionic-reader", "-f", "a.txt", "hi"]).is_err());
    }

    #[test]
    fn subcommands_parse() {
        let args = Args::try_parse_from(["bionic-reader", "config"]).unwrap();
        assert!(matches!(args.command, Some(Commands::Config)));
        assert!(!args.has_input());
    }

    #[test]
    fn log_level_from_flags() {
        let args = Args::try_parse_from(["bionic-reader", "-vv"]).unwrap();
        assert_eq!(args.log_level(), "debug");
        let args = Args::try_parse_from(["bionic-reader", "-q"]).unwrap();
        assert_eq!(args.log_level(), "error");
        let args = Args::try_parse_from(["bionic-reader"]).unwrap();
        assert_eq!(args.log_level(), "warn");
    }
}
