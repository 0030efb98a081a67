//! Configuration: default bold fraction, output format, and wrap width.
//!
//! Resolution order for the fraction: `BIONIC_FRACTION` (environment or `.env`), then the
//! value saved by the TUI, then [`BoldFraction::DEFAULT`]. CLI flags override all of these.

use std::env;
use std::io::IsTerminal;

use crate::core::bionic::BoldFraction;
use crate::core::persistence;
use crate::core::render::{OutputFormat, UnknownFormat};

pub const FRACTION_VAR: &str = "BIONIC_FRACTION";
pub const FORMAT_VAR: &str = "BIONIC_FORMAT";
pub const WIDTH_VAR: &str = "BIONIC_WIDTH";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bold_fraction: BoldFraction,
    pub fraction_source: FractionSource,
    pub format: OutputFormat,
    pub width: Option<usize>,
}

/// Where the effective bold fraction came from (shown by the `config` command).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionSource {
    Env,
    Saved,
    Default,
}

impl FractionSource {
    pub fn describe(self) -> &'static str {
        match self {
            FractionSource::Env => "from BIONIC_FRACTION",
            FractionSource::Saved => "from saved settings",
            FractionSource::Default => "default",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("BIONIC_FRACTION must be a number between 0 and 1, got '{0}'")]
    InvalidFraction(String),
    #[error("BIONIC_FORMAT: {0}")]
    InvalidFormat(#[from] UnknownFormat),
    #[error("BIONIC_WIDTH must be a positive integer, got '{0}'")]
    InvalidWidth(String),
}

/// Parse a fraction string, accepting only finite values in [0, 1].
pub fn parse_fraction(s: &str) -> Option<BoldFraction> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| (0.0..=1.0).contains(v))
        .map(BoldFraction::new)
}

/// Load configuration from the environment and saved preferences.
pub fn load() -> Result<Config, ConfigError> {
    let default_format = if std::io::stdout().is_terminal() {
        OutputFormat::Ansi
    } else {
        OutputFormat::Plain
    };
    resolve(
        |key| env::var(key).ok().filter(|v| !v.trim().is_empty()),
        persistence::load_last_fraction(),
        default_format,
    )
}

/// Build a [`Config`] from a variable lookup and the saved fraction.
pub fn resolve(
    lookup: impl Fn(&str) -> Option<String>,
    saved: Option<BoldFraction>,
    default_format: OutputFormat,
) -> Result<Config, ConfigError> {
    let (bold_fraction, fraction_source) = match lookup(FRACTION_VAR) {
        Some(raw) => (
            parse_fraction(&raw).ok_or(ConfigError::InvalidFraction(raw))?,
            FractionSource::Env,
        ),
        None => match saved {
            Some(f) => (f, FractionSource::Saved),
            None => (BoldFraction::DEFAULT, FractionSource::Default),
        },
    };

    let format = match lookup(FORMAT_VAR) {
        Some(raw) => raw.parse()?,
        None => default_format,
    };

    let width = match lookup(WIDTH_VAR) {
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(w) if w > 0 => Some(w),
            _ => return Err(ConfigError::InvalidWidth(raw)),
        },
        None => None,
    };

    log::debug!(
        "Config: fraction {} ({}), format {}, width {:?}",
        bold_fraction,
        fraction_source.describe(),
        format,
        width
    );

    Ok(Config {
        bold_fraction,
        fraction_source,
        format,
        width,
    })
}
