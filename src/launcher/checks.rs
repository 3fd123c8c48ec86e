// src/launcher/checks.rs

//! Preconditions checked before the engine may run.

use std::path::Path;

use tracing::debug;

use crate::fs::FileSystem;
use crate::types::{ArtifactState, InputState, RunConfig};

/// Ready means: exists, is a regular file, and carries an execute bit.
pub fn verify_artifact<F>(fs: &F, executable: &Path) -> ArtifactState
where
    F: FileSystem + ?Sized,
{
    let state = if fs.is_executable(executable) {
        ArtifactState::Ready
    } else {
        ArtifactState::Missing
    };
    debug!(path = %executable.display(), ?state, "checked engine executable");
    state
}

/// Check the input file, unless the engine is generating its own data.
pub fn resolve_input<F>(fs: &F, config: &RunConfig, input_file: &Path) -> InputState
where
    F: FileSystem + ?Sized,
{
    if config.generate_input {
        debug!("engine generates its own input; skipping input file check");
        return InputState::Generated;
    }

    if fs.exists(input_file) {
        InputState::Present
    } else {
        InputState::Missing
    }
}
