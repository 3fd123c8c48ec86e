// src/cli.rs

//! CLI argument parsing using `clap`.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::errors::Result;
use crate::types::{MapKind, RunConfig};

/// Command-line arguments for `tme`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tme",
    version,
    about = "Build (if needed) and run the trade matching engine.",
    long_about = None
)]
pub struct CliArgs {
    /// Number of orders to feed the engine.
    #[arg(short = 'n', long = "num", value_name = "COUNT")]
    pub num: u64,

    /// Order book map implementation used by the engine.
    #[arg(short = 'm', long = "map", value_enum, value_name = "MAP")]
    pub map: MapKind,

    /// Enable engine debug mode.
    #[arg(short = 'd', long = "dbg")]
    pub dbg: bool,

    /// Let the engine generate its own input instead of reading the input file.
    #[arg(short = 'g', long = "gen")]
    pub generate: bool,

    /// Force a build (always run the build script).
    #[arg(short = 'b', long = "build")]
    pub build: bool,

    /// Launcher settings file (TOML) overriding collaborator paths.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TME_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Report the build decision and the engine command, but run nothing.
    #[arg(long)]
    pub dry_run: bool,
}

impl CliArgs {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            order_count: self.num,
            map_kind: self.map,
            debug: self.dbg,
            generate_input: self.generate,
            force_build: self.build,
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Parse raw arguments (including the program name) into `CliArgs`.
///
/// Usage errors, `--help` and `--version` all come back as
/// [`LauncherError::Cli`](crate::errors::LauncherError::Cli); the caller decides
/// how to render them.
pub fn try_parse_from<I, T>(raw_args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(CliArgs::try_parse_from(raw_args)?)
}

/// Parse raw arguments straight into the immutable [`RunConfig`].
pub fn resolve_config<I, T>(raw_args: I) -> Result<RunConfig>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    try_parse_from(raw_args).map(|args| args.run_config())
}
