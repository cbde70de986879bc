// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::types::FailurePolicy;

/// Poll interval used when neither the CLI nor the config file sets one.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Top-level configuration as read from a config file.
///
/// ```toml
/// quiet = false
/// verbose = true
/// poll_interval = "200ms"
/// on_failure = "exit"
///
/// [[files]]
/// path = "f.txt"
/// cmd = "echo changed"
/// ```
///
/// This is the raw, unvalidated shape. Convert it into a [`RunConfig`] with
/// `RunConfig::try_from`, which enforces the invariants.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub quiet: bool,

    #[serde(default)]
    pub verbose: bool,

    /// Files to watch, in declaration order.
    #[serde(default)]
    pub files: Vec<FileEntry>,

    /// Duration string (e.g. `"250ms"`) between two polls of the same file.
    #[serde(default)]
    pub poll_interval: Option<String>,

    #[serde(default)]
    pub on_failure: Option<FailurePolicy>,
}

/// One `[[files]]` entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileEntry {
    pub path: String,

    /// Command to run on modification. Missing or blank means report only.
    #[serde(default)]
    pub cmd: Option<String>,
}

/// A single file to watch and what to run when it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchTarget {
    pub path: PathBuf,
    pub command: Option<String>,
}

impl WatchTarget {
    /// Build a target, normalising a blank command to `None`.
    pub fn new(path: impl Into<PathBuf>, command: Option<String>) -> Self {
        let command = command
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        Self {
            path: path.into(),
            command,
        }
    }
}

/// Fully resolved, validated run configuration.
///
/// Built once before any watch task starts and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub quiet: bool,
    pub verbose: bool,
    pub targets: Vec<WatchTarget>,
    pub poll_interval: Duration,
    pub failure_policy: FailurePolicy,
}

impl RunConfig {
    pub(crate) fn new_unchecked(
        quiet: bool,
        verbose: bool,
        targets: Vec<WatchTarget>,
        poll_interval: Duration,
        failure_policy: FailurePolicy,
    ) -> Self {
        Self {
            quiet,
            verbose,
            targets,
            poll_interval,
            failure_policy,
        }
    }
}
