// src/config/model.rs

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_EXECUTABLE: &str = "./TradeMatchingEngine";
pub const DEFAULT_BUILD_SCRIPT: &str = "./build.sh";
pub const DEFAULT_INPUT_FILE: &str = "tme_input.txt";

/// Settings file as read from TOML, before validation.
///
/// ```toml
/// [paths]
/// executable = "./TradeMatchingEngine"
/// build_script = "./build.sh"
/// input_file = "tme_input.txt"
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawLauncherSettings {
    #[serde(default)]
    pub paths: PathsSection,
}

/// `[paths]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsSection {
    /// Engine executable produced by the build script.
    #[serde(default = "default_executable")]
    pub executable: PathBuf,

    /// Build script, run with no arguments.
    #[serde(default = "default_build_script")]
    pub build_script: PathBuf,

    /// Order input file required when the engine does not generate its own.
    #[serde(default = "default_input_file")]
    pub input_file: PathBuf,
}

fn default_executable() -> PathBuf {
    PathBuf::from(DEFAULT_EXECUTABLE)
}

fn default_build_script() -> PathBuf {
    PathBuf::from(DEFAULT_BUILD_SCRIPT)
}

fn default_input_file() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_FILE)
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            build_script: default_build_script(),
            input_file: default_input_file(),
        }
    }
}

/// Validated collaborator paths.
///
/// Only obtainable through `TryFrom<RawLauncherSettings>` or
/// [`LauncherSettings::default`], so every path is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherSettings {
    executable: PathBuf,
    build_script: PathBuf,
    input_file: PathBuf,
}

impl LauncherSettings {
    pub(crate) fn new_unchecked(paths: PathsSection) -> Self {
        Self {
            executable: anchor_to_cwd(paths.executable),
            build_script: anchor_to_cwd(paths.build_script),
            input_file: paths.input_file,
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn build_script(&self) -> &Path {
        &self.build_script
    }

    pub fn input_file(&self) -> &Path {
        &self.input_file
    }
}

/// Turn a bare program name into `./name`.
///
/// A spawn of a single-component path searches `$PATH`, while the readiness
/// check looks in the current directory; both must see the same file.
fn anchor_to_cwd(path: PathBuf) -> PathBuf {
    let mut components = path.components();
    let bare = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if bare { Path::new(".").join(path) } else { path }
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self::new_unchecked(PathsSection::default())
    }
}
