//! Persistence of user preferences (the last bold fraction) in ~/.config/bionic-reader/.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::bionic::BoldFraction;
use crate::core::paths;

/// Errors when storing preferences.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Failed to save preferences: {0}")]
    Io(#[from] io::Error),
}

/// Path to the saved bold fraction.
pub fn fraction_path() -> Option<PathBuf> {
    paths::config_dir().map(|d| d.join("bold_fraction"))
}

/// Load the last used bold fraction, if the file exists and holds a number in [0, 1].
pub fn load_last_fraction() -> Option<BoldFraction> {
    load_fraction_from(&fraction_path()?)
}

/// Load a bold fraction saved at `path`. Invalid content is logged and ignored.
pub fn load_fraction_from(path: &Path) -> Option<BoldFraction> {
    let content = fs::read_to_string(path).ok()?;
    match content.trim().parse::<f64>() {
        Ok(v) if (0.0..=1.0).contains(&v) => Some(BoldFraction::new(v)),
        _ => {
            log::warn!("Ignoring invalid saved fraction in {}", path.display());
            None
        }
    }
}

/// Save the bold fraction at `path`, creating parent directories.
pub fn save_fraction_to(path: &Path, fraction: BoldFraction) -> Result<(), PersistenceError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, format!("{}\n", fraction.get()))?;
    log::debug!("Saved bold fraction {} to {}", fraction, path.display());
    Ok(())
}
