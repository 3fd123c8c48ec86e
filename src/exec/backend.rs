// src/exec/backend.rs

//! Pluggable process backend abstraction.
//!
//! The launcher talks to a `ProcessBackend` instead of spawning processes
//! itself, so tests can swap in a fake that records what would have run.
//!
//! - `RealProcessBackend` is the production implementation; it runs both
//!   collaborators through [`run_inherited`].
//! - Tests provide their own `ProcessBackend` that returns scripted exit
//!   codes and, for builds, can make the artifact appear.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use crate::errors::Result;
use crate::types::ProcessExit;

use super::command::run_inherited;

/// Boxed future returned by [`ProcessBackend`] methods.
pub type ProcessFuture<'a> = Pin<Box<dyn Future<Output = Result<ProcessExit>> + Send + 'a>>;

/// Trait abstracting how the two external collaborators are run.
pub trait ProcessBackend: Send {
    /// Run the build script with no arguments and wait for it.
    fn run_build<'a>(&'a mut self, script: &'a Path) -> ProcessFuture<'a>;

    /// Run the engine with its positional arguments and wait for it.
    fn run_engine<'a>(&'a mut self, executable: &'a Path, args: &'a [String])
    -> ProcessFuture<'a>;
}

/// Real backend used in production: spawns OS processes with inherited stdio.
#[derive(Debug, Clone, Default)]
pub struct RealProcessBackend;

impl RealProcessBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessBackend for RealProcessBackend {
    fn run_build<'a>(&'a mut self, script: &'a Path) -> ProcessFuture<'a> {
        Box::pin(async move { Ok(run_inherited(script, &[]).await?) })
    }

    fn run_engine<'a>(
        &'a mut self,
        executable: &'a Path,
        args: &'a [String],
    ) -> ProcessFuture<'a> {
        Box::pin(async move { Ok(run_inherited(executable, args).await?) })
    }
}
