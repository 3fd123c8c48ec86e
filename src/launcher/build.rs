// src/launcher/build.rs

//! Build-or-skip policy.

use std::path::Path;

use tracing::{error, info};

use crate::errors::Result;
use crate::exec::ProcessBackend;
use crate::types::{ArtifactState, BuildDecision, BuildOutcome, RunConfig};

/// Decide whether the build script has to run.
///
/// Precedence: `--build` always wins; otherwise a ready artifact skips the
/// build; anything else builds.
pub fn decide_build(config: &RunConfig, artifact: ArtifactState) -> BuildDecision {
    if config.force_build {
        BuildDecision::Forced
    } else if artifact == ArtifactState::Ready {
        BuildDecision::Skip
    } else {
        BuildDecision::ArtifactNotReady
    }
}

/// Apply the build policy, running the build script at most once.
///
/// A non-zero exit is reported as `BuildOutcome::Failed`, not as an `Err`;
/// `Err` is reserved for failing to run the script at all.
pub async fn ensure_built<B>(
    config: &RunConfig,
    artifact: ArtifactState,
    script: &Path,
    backend: &mut B,
) -> Result<BuildOutcome>
where
    B: ProcessBackend + ?Sized,
{
    match decide_build(config, artifact) {
        BuildDecision::Skip => {
            info!("executable already exists, skipping build");
            return Ok(BuildOutcome::Skipped);
        }
        BuildDecision::Forced => info!(script = %script.display(), "forcing build"),
        BuildDecision::ArtifactNotReady => {
            info!(script = %script.display(), "executable not found, running build")
        }
    }

    let exit = backend.run_build(script).await?;
    if exit.success() {
        Ok(BuildOutcome::Succeeded)
    } else {
        error!(script = %script.display(), exit_code = exit.code, "build failed");
        Ok(BuildOutcome::Failed(exit.code))
    }
}
