// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{LauncherSettings, RawLauncherSettings};
use crate::errors::Result;

/// Read a settings file and return the raw, unvalidated model.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawLauncherSettings> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let settings: RawLauncherSettings = toml::from_str(&contents)?;

    Ok(settings)
}

/// Read a settings file and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<LauncherSettings> {
    let raw = load_from_path(&path)?;
    let settings = LauncherSettings::try_from(raw)?;
    Ok(settings)
}

/// Settings for this run: the given file if any, built-in defaults otherwise.
///
/// An explicitly named file that cannot be read is an error; there is no
/// silent fallback to defaults.
pub fn resolve_settings(path: Option<&Path>) -> Result<LauncherSettings> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading launcher settings");
            load_and_validate(path)
        }
        None => Ok(LauncherSettings::default()),
    }
}
