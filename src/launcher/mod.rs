// src/launcher/mod.rs

//! The build → verify → invoke pipeline.
//!
//! `Launcher` owns the collaborator paths, a [`FileSystem`] to observe the
//! artifacts and a [`ProcessBackend`] to run the build script and the engine.
//! Each stage lives in its own module and returns a small outcome enum:
//!
//! - [`build`]: `decide_build` / `ensure_built`
//! - [`checks`]: `verify_artifact` / `resolve_input`
//! - [`invocation`]: `build_invocation`
//!
//! `run` threads those outcomes together and turns every terminal one into a
//! [`LauncherError`]. Nothing is retried.

pub mod build;
pub mod checks;
pub mod invocation;

use std::fmt;

use tracing::{error, info};

use crate::config::LauncherSettings;
use crate::errors::{LauncherError, Result};
use crate::exec::ProcessBackend;
use crate::fs::FileSystem;
use crate::types::{
    ArtifactState, BuildDecision, BuildOutcome, InputState, ProcessExit, RunConfig,
};

pub use build::{decide_build, ensure_built};
pub use checks::{resolve_input, verify_artifact};
pub use invocation::{ENGINE_ARG_COUNT, build_invocation, render_command};

pub struct Launcher<F, B> {
    settings: LauncherSettings,
    fs: F,
    backend: B,
}

impl<F, B> Launcher<F, B>
where
    F: FileSystem,
    B: ProcessBackend,
{
    pub fn new(settings: LauncherSettings, fs: F, backend: B) -> Self {
        Self {
            settings,
            fs,
            backend,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run the whole pipeline and return the engine's exit.
    ///
    /// Any `Err` means the engine was never started.
    pub async fn run(&mut self, config: &RunConfig) -> Result<ProcessExit> {
        let executable = self.settings.executable();
        let script = self.settings.build_script();

        let before = verify_artifact(&self.fs, executable);
        if let BuildOutcome::Failed(code) =
            ensure_built(config, before, script, &mut self.backend).await?
        {
            return Err(LauncherError::BuildFailed {
                script: script.to_path_buf(),
                code,
            });
        }

        // Re-check even after a skipped or "successful" build.
        if verify_artifact(&self.fs, executable) == ArtifactState::Missing {
            error!(path = %executable.display(), "executable not found after build");
            return Err(LauncherError::ArtifactMissing(executable.to_path_buf()));
        }

        let input_file = self.settings.input_file();
        if !resolve_input(&self.fs, config, input_file).is_ready() {
            error!(path = %input_file.display(), "input file not found");
            return Err(LauncherError::InputMissing(input_file.to_path_buf()));
        }

        let args = build_invocation(config);
        info!(command = %render_command(executable, &args), "running engine");

        self.backend.run_engine(executable, &args).await
    }

    /// Evaluate every decision `run` would make, without running anything.
    pub fn plan(&self, config: &RunConfig) -> LaunchPlan {
        let executable = self.settings.executable();
        let artifact = verify_artifact(&self.fs, executable);

        LaunchPlan {
            build: decide_build(config, artifact),
            artifact,
            input: resolve_input(&self.fs, config, self.settings.input_file()),
            command: render_command(executable, &build_invocation(config)),
        }
    }
}

/// Result of a dry run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub build: BuildDecision,
    /// Artifact state before any build.
    pub artifact: ArtifactState,
    pub input: InputState,
    pub command: String,
}

impl fmt::Display for LaunchPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let build = match self.build {
            BuildDecision::Forced => "run (forced)",
            BuildDecision::ArtifactNotReady => "run (executable missing or not executable)",
            BuildDecision::Skip => "skip (executable ready)",
        };
        let input = match self.input {
            InputState::Present => "present",
            InputState::Generated => "generated by engine",
            InputState::Missing => "MISSING",
        };

        writeln!(f, "tme dry-run")?;
        writeln!(f, "  build:   {build}")?;
        writeln!(f, "  input:   {input}")?;
        write!(f, "  command: {}", self.command)
    }
}
