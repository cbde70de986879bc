// src/exec/command.rs

use std::fmt;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tracing::debug;

use crate::errors::{Result, WatchrError};

/// A command line split into the executable and its argument.
///
/// The first whitespace-delimited token is the program. Every remaining token
/// is rejoined with single spaces into **one** argument, so `cp a b` runs `cp`
/// with the single argument `"a b"`. When nothing follows the program, no
/// argument is passed at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub arg: Option<String>,
}

impl CommandSpec {
    /// Split a command line. Returns `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let program = tokens.next()?.to_string();
        let rest = tokens.collect::<Vec<_>>().join(" ");

        Some(Self {
            program,
            arg: if rest.is_empty() { None } else { Some(rest) },
        })
    }

    /// The argv that will be handed to the OS, program first.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.arg.as_deref())
            .collect()
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.arg {
            Some(arg) => write!(f, "{} {}", self.program, arg),
            None => f.write_str(&self.program),
        }
    }
}

/// What a successful command run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Captured standard output, lossily decoded as UTF-8.
    pub stdout: String,
    /// Wall-clock time from launch to exit.
    pub duration: Duration,
}

/// Run a command to completion, capturing stdout and timing it.
///
/// Failure to launch and a non-zero exit status are both errors; stderr is
/// kept in the error for diagnostics.
pub async fn run_command(spec: &CommandSpec) -> Result<CommandOutput> {
    let mut cmd = Command::new(&spec.program);
    if let Some(arg) = &spec.arg {
        cmd.arg(arg);
    }
    cmd.kill_on_drop(true);

    debug!(argv = ?spec.argv(), "spawning command");

    let started = Instant::now();
    let output = cmd
        .output()
        .await
        .map_err(|source| WatchrError::CommandLaunch {
            program: spec.program.clone(),
            source,
        })?;
    let duration = started.elapsed();

    if !output.status.success() {
        return Err(WatchrError::CommandFailed {
            command: spec.to_string(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    debug!(
        program = %spec.program,
        elapsed = ?duration,
        bytes = output.stdout.len(),
        "command exited successfully"
    );

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        duration,
    })
}
