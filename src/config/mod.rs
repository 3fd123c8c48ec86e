// src/config/mod.rs

//! Launcher settings: where the build script, engine executable and input
//! file live.
//!
//! - `model.rs` holds the TOML-backed data model.
//! - `loader.rs` reads a settings file from disk.
//! - `validate.rs` turns the raw model into checked `LauncherSettings`.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, resolve_settings};
pub use model::{LauncherSettings, PathsSection, RawLauncherSettings};
