// src/exec/backend.rs

//! Pluggable command runner abstraction.
//!
//! Watch tasks talk to a `CommandRunner` instead of spawning processes
//! directly. Production code uses [`RealCommandRunner`]; tests can provide
//! their own implementation that records invocations and returns scripted
//! results without touching the OS.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;

use super::command::{run_command, CommandOutput, CommandSpec};

/// Trait abstracting how a command is executed.
pub trait CommandRunner: Send + Sync {
    /// Run the command to completion.
    ///
    /// Implementations must return an error for a launch failure or a
    /// non-zero exit status.
    fn run<'a>(
        &'a self,
        spec: &'a CommandSpec,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + 'a>>;
}

/// Real runner used in production, backed by `tokio::process`.
#[derive(Debug, Clone, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run<'a>(
        &'a self,
        spec: &'a CommandSpec,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + 'a>> {
        Box::pin(run_command(spec))
    }
}
