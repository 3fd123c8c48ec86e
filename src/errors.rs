// src/errors.rs

//! Crate-wide error aliases and helpers.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LauncherError {
    /// Bad or missing command-line input (also carries `--help`/`--version`).
    #[error(transparent)]
    Cli(#[from] clap::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Build failed: {} exited with code {code}", .script.display())]
    BuildFailed { script: PathBuf, code: i32 },

    #[error("Executable {} not found or not executable after build", .0.display())]
    ArtifactMissing(PathBuf),

    #[error("Input file '{}' not found; nothing to load for input", .0.display())]
    InputMissing(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LauncherError>;
