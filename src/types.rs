// src/types.rs

use std::fmt;

use clap::ValueEnum;

/// Ordering/lookup structure the engine uses for its order book.
///
/// The `#[value(name)]` spelling is what both the CLI accepts and the engine
/// receives as its second positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MapKind {
    #[value(name = "std_map")]
    StdMap,
    #[value(name = "btree_map")]
    BTreeMap,
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

/// Parameters for one launcher invocation.
///
/// Built once from the command line and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub order_count: u64,
    pub map_kind: MapKind,
    pub debug: bool,
    pub generate_input: bool,
    pub force_build: bool,
}

/// Why (or whether) the build collaborator should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildDecision {
    /// `--build` was given; build regardless of artifact state.
    Forced,
    /// The artifact is missing or not executable.
    ArtifactNotReady,
    /// The artifact is already usable.
    Skip,
}

impl BuildDecision {
    pub fn runs_build(self) -> bool {
        !matches!(self, BuildDecision::Skip)
    }
}

/// Result of the build stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Skipped,
    Succeeded,
    /// The build script exited with this non-zero code.
    Failed(i32),
}

/// Readiness of the engine executable on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactState {
    /// Regular file with an execute bit.
    Ready,
    /// Absent, not a regular file, or not executable.
    Missing,
}

/// Whether the engine's input precondition holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    /// The input file exists on disk.
    Present,
    /// The engine was asked to generate its own data; nothing was checked.
    Generated,
    /// The input file is required but absent.
    Missing,
}

impl InputState {
    pub fn is_ready(self) -> bool {
        !matches!(self, InputState::Missing)
    }
}

/// Exit information of a finished child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    pub code: i32,
}

impl ProcessExit {
    pub fn new(code: i32) -> Self {
        Self { code }
    }

    pub fn success(self) -> bool {
        self.code == 0
    }
}
