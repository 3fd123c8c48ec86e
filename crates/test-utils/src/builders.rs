#![allow(dead_code)]

use std::path::PathBuf;

use tme::config::{LauncherSettings, PathsSection, RawLauncherSettings};
use tme::types::{MapKind, RunConfig};

/// Builder for `RunConfig`; starts from `-n 0 -m std_map` with every flag off.
pub struct RunConfigBuilder {
    config: RunConfig,
}

impl RunConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RunConfig {
                order_count: 0,
                map_kind: MapKind::StdMap,
                debug: false,
                generate_input: false,
                force_build: false,
            },
        }
    }

    pub fn orders(mut self, count: u64) -> Self {
        self.config.order_count = count;
        self
    }

    pub fn map(mut self, kind: MapKind) -> Self {
        self.config.map_kind = kind;
        self
    }

    pub fn debug(mut self, val: bool) -> Self {
        self.config.debug = val;
        self
    }

    pub fn generate_input(mut self, val: bool) -> Self {
        self.config.generate_input = val;
        self
    }

    pub fn force_build(mut self, val: bool) -> Self {
        self.config.force_build = val;
        self
    }

    pub fn build(self) -> RunConfig {
        self.config
    }
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for validated `LauncherSettings`.
pub struct SettingsBuilder {
    paths: PathsSection,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self {
            paths: PathsSection::default(),
        }
    }

    /// Put all three collaborator paths under `dir`, keeping default file names.
    pub fn rooted_at(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self::new()
            .executable(dir.join("TradeMatchingEngine"))
            .build_script(dir.join("build.sh"))
            .input_file(dir.join("tme_input.txt"))
    }

    pub fn executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.executable = path.into();
        self
    }

    pub fn build_script(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.build_script = path.into();
        self
    }

    pub fn input_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.input_file = path.into();
        self
    }

    pub fn build(self) -> LauncherSettings {
        LauncherSettings::try_from(RawLauncherSettings { paths: self.paths })
            .expect("Failed to build valid settings from builder")
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
