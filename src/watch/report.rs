// src/watch/report.rs

//! User-facing progress reports emitted by a watch task.
//!
//! Reports are plain values so tests can assert on exactly what a detection
//! produced; [`Report::emit`] turns one into a `tracing` event.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::info;

use crate::watch::stats::{format_delta, StatsSnapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Started { path: PathBuf },
    Modified { path: PathBuf, at: DateTime<Local> },
    NoCommand,
    Executing { command: String },
    CommandOutput { output: String },
    Stats(StatsSnapshot),
}

impl Report {
    /// Log this report against the watched `path`.
    pub fn emit(&self, path: &Path) {
        let path = path.display();
        match self {
            Report::Stats(snap) => info!(
                path = %path,
                modifications = snap.modifications,
                "{self}"
            ),
            Report::Executing { command } => info!(path = %path, command = %command, "{self}"),
            _ => info!(path = %path, "{self}"),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Started { path } => {
                write!(f, "starting watchr for the file: {}", path.display())
            }
            Report::Modified { path, at } => {
                write!(f, "the file {} was modified at: {}", path.display(), at)
            }
            Report::NoCommand => f.write_str("not executing any command"),
            Report::Executing { command } => write!(f, "executing: {command}"),
            Report::CommandOutput { output } => write!(f, "command output:\n{output}"),
            Report::Stats(snap) => {
                write!(
                    f,
                    "stats: {} modifications, last modified {} ago, average modification time {}",
                    snap.modifications,
                    format_delta(snap.last_interval),
                    format_delta(snap.average_interval),
                )?;
                if let Some(exec) = snap.execution {
                    write!(f, ", command execution {exec:?}")?;
                }
                Ok(())
            }
        }
    }
}
