// src/exec/command.rs

use std::path::Path;
use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::{debug, info};

use crate::types::ProcessExit;

/// Run `program` with `args`, inheriting the launcher's stdin/stdout/stderr,
/// and wait for it to exit. No timeout, no output capture.
pub async fn run_inherited(program: &Path, args: &[String]) -> Result<ProcessExit> {
    debug!(program = %program.display(), ?args, "spawning process");

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let mut child = cmd
        .spawn()
        .with_context(|| format!("spawning process {}", program.display()))?;

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for process {}", program.display()))?;

    let exit = ProcessExit::new(exit_code(status));

    info!(
        program = %program.display(),
        exit_code = exit.code,
        success = exit.success(),
        "process exited"
    );

    Ok(exit)
}

/// Map an `ExitStatus` to the code a shell would report.
///
/// On Unix a child killed by a signal has no exit code; it is reported as
/// `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
