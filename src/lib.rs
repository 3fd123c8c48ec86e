// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod launcher;
pub mod logging;
pub mod types;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::resolve_settings;
use crate::errors::Result;
use crate::exec::RealProcessBackend;
use crate::fs::RealFileSystem;
use crate::launcher::Launcher;

/// High-level entry point used by `main.rs`.
///
/// Returns the exit code the launcher should terminate with: the engine's
/// own code on a hand-off, `0` for a dry run.
pub async fn run(args: CliArgs) -> Result<i32> {
    let settings = resolve_settings(args.config.as_deref())?;
    let config = args.run_config();
    debug!(?config, ?settings, "resolved run configuration");

    let mut launcher = Launcher::new(settings, RealFileSystem, RealProcessBackend::new());

    if args.dry_run {
        println!("{}", launcher.plan(&config));
        return Ok(0);
    }

    let exit = launcher.run(&config).await?;
    Ok(exit.code)
}
