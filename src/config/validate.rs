// src/config/validate.rs

use std::path::Path;

use crate::config::model::{LauncherSettings, RawLauncherSettings};
use crate::errors::{LauncherError, Result};

impl TryFrom<RawLauncherSettings> for LauncherSettings {
    type Error = LauncherError;

    fn try_from(raw: RawLauncherSettings) -> std::result::Result<Self, Self::Error> {
        validate_raw_settings(&raw)?;
        Ok(LauncherSettings::new_unchecked(raw.paths))
    }
}

fn validate_raw_settings(raw: &RawLauncherSettings) -> Result<()> {
    ensure_non_empty("executable", &raw.paths.executable)?;
    ensure_non_empty("build_script", &raw.paths.build_script)?;
    ensure_non_empty("input_file", &raw.paths.input_file)?;
    ensure_distinct(raw)?;
    Ok(())
}

fn ensure_non_empty(key: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(LauncherError::ConfigError(format!(
            "[paths].{key} must not be empty"
        )));
    }
    Ok(())
}

fn ensure_distinct(raw: &RawLauncherSettings) -> Result<()> {
    let paths = &raw.paths;
    if paths.executable == paths.build_script {
        return Err(LauncherError::ConfigError(format!(
            "[paths].executable and [paths].build_script both point to {}",
            paths.executable.display()
        )));
    }
    if paths.input_file == paths.executable || paths.input_file == paths.build_script {
        return Err(LauncherError::ConfigError(format!(
            "[paths].input_file {} collides with another collaborator path",
            paths.input_file.display()
        )));
    }
    Ok(())
}
