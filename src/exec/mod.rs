// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`command`] spawns a child with inherited standard streams and maps its
//!   exit status to a plain exit code.
//! - [`backend`] provides the `ProcessBackend` trait and the production
//!   `RealProcessBackend`, which tests replace with a fake implementation.

pub mod backend;
pub mod command;

pub use backend::{ProcessBackend, ProcessFuture, RealProcessBackend};
pub use command::{exit_code, run_inherited};
