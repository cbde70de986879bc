#![allow(dead_code)]

use std::time::Duration;

use watchr::config::{ConfigFile, FileEntry, RunConfig};
use watchr::types::FailurePolicy;

/// Builder for `RunConfig` to simplify test setup.
///
/// Goes through the same `ConfigFile -> RunConfig` validation as a real
/// config file.
pub struct RunConfigBuilder {
    config: ConfigFile,
}

impl RunConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ConfigFile::default(),
        }
    }

    pub fn quiet(mut self, val: bool) -> Self {
        self.config.quiet = val;
        self
    }

    pub fn verbose(mut self, val: bool) -> Self {
        self.config.verbose = val;
        self
    }

    /// Watch `path`, reporting only.
    pub fn with_file(mut self, path: &str) -> Self {
        self.config.files.push(FileEntry {
            path: path.to_string(),
            cmd: None,
        });
        self
    }

    /// Watch `path` and run `cmd` on each modification.
    pub fn with_command(mut self, path: &str, cmd: &str) -> Self {
        self.config.files.push(FileEntry {
            path: path.to_string(),
            cmd: Some(cmd.to_string()),
        });
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.config.poll_interval = Some(format!("{}ms", interval.as_millis()));
        self
    }

    pub fn on_failure(mut self, policy: FailurePolicy) -> Self {
        self.config.on_failure = Some(policy);
        self
    }

    pub fn build(self) -> RunConfig {
        RunConfig::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
