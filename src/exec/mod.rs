// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`command`] splits command lines and runs them with
//!   `tokio::process::Command`, capturing stdout and timing the run.
//! - [`backend`] provides the `CommandRunner` trait and the concrete
//!   `RealCommandRunner` used in production, which tests can replace with a
//!   fake implementation.

pub mod backend;
pub mod command;

pub use backend::{CommandRunner, RealCommandRunner};
pub use command::{run_command, CommandOutput, CommandSpec};
