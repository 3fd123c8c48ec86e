use std::path::{Path, PathBuf};

use tme::exec::{ProcessBackend, ProcessFuture};
use tme::fs::mock::MockFileSystem;
use tme::types::ProcessExit;
use tracing::debug;

/// A process the launcher asked the backend to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Build(PathBuf),
    Engine { executable: PathBuf, args: Vec<String> },
}

/// A fake backend that:
/// - records every build / engine run in order
/// - returns scripted exit codes (0 unless told otherwise)
/// - optionally marks an artifact executable in a `MockFileSystem` when a
///   build succeeds, the way a real build script would.
#[derive(Debug, Default)]
pub struct FakeBackend {
    build_exit: i32,
    engine_exit: i32,
    produces: Option<(MockFileSystem, PathBuf)>,
    calls: Vec<Invocation>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_build_exit(mut self, code: i32) -> Self {
        self.build_exit = code;
        self
    }

    pub fn with_engine_exit(mut self, code: i32) -> Self {
        self.engine_exit = code;
        self
    }

    /// On a successful build, create `artifact` as an executable in `fs`.
    pub fn producing(mut self, fs: &MockFileSystem, artifact: impl AsRef<Path>) -> Self {
        self.produces = Some((fs.clone(), artifact.as_ref().to_path_buf()));
        self
    }

    pub fn calls(&self) -> &[Invocation] {
        &self.calls
    }

    pub fn build_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Invocation::Build(_)))
            .count()
    }

    /// Argument vectors of every engine run.
    pub fn engine_runs(&self) -> Vec<Vec<String>> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Invocation::Engine { args, .. } => Some(args.clone()),
                Invocation::Build(_) => None,
            })
            .collect()
    }
}

impl ProcessBackend for FakeBackend {
    fn run_build<'a>(&'a mut self, script: &'a Path) -> ProcessFuture<'a> {
        debug!(script = %script.display(), "fake build");
        self.calls.push(Invocation::Build(script.to_path_buf()));

        if self.build_exit == 0 {
            if let Some((fs, artifact)) = &self.produces {
                fs.add_executable(artifact);
            }
        }

        let exit = ProcessExit::new(self.build_exit);
        Box::pin(async move { Ok(exit) })
    }

    fn run_engine<'a>(
        &'a mut self,
        executable: &'a Path,
        args: &'a [String],
    ) -> ProcessFuture<'a> {
        debug!(executable = %executable.display(), ?args, "fake engine run");
        self.calls.push(Invocation::Engine {
            executable: executable.to_path_buf(),
            args: args.to_vec(),
        });

        let exit = ProcessExit::new(self.engine_exit);
        Box::pin(async move { Ok(exit) })
    }
}
