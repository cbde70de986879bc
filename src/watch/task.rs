// src/watch/task.rs

use std::convert::Infallible;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Local, TimeDelta};
use tokio::time::sleep;
use tracing::{debug, trace};

use crate::config::{RunConfig, WatchTarget};
use crate::errors::{Result, WatchrError};
use crate::exec::{CommandOutput, CommandRunner, CommandSpec};
use crate::fs::FileSystem;
use crate::watch::report::Report;
use crate::watch::stats::{mtime_diff, WatchStats};

/// Global output flags and timing shared by every watch task.
#[derive(Debug, Clone, Copy)]
pub struct WatchOptions {
    pub quiet: bool,
    pub verbose: bool,
    pub poll_interval: Duration,
}

impl From<&RunConfig> for WatchOptions {
    fn from(cfg: &RunConfig) -> Self {
        Self {
            quiet: cfg.quiet,
            verbose: cfg.verbose,
            poll_interval: cfg.poll_interval,
        }
    }
}

/// Everything one detected modification produced.
#[derive(Debug, Clone)]
pub struct Detection {
    pub modified_at: SystemTime,
    pub diff: TimeDelta,
    /// Set when a command ran (successfully) for this detection.
    pub execution: Option<CommandOutput>,
    /// Reports emitted for this detection, in order. Empty in quiet mode.
    pub reports: Vec<Report>,
}

/// Polling loop for a single file.
///
/// Owns its baseline timestamp and statistics exclusively.
pub struct WatchTask {
    target: WatchTarget,
    command: Option<CommandSpec>,
    options: WatchOptions,
    fs: Arc<dyn FileSystem>,
    runner: Arc<dyn CommandRunner>,
    baseline: SystemTime,
    stats: WatchStats,
}

impl std::fmt::Debug for WatchTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchTask")
            .field("target", &self.target)
            .field("baseline", &self.baseline)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl WatchTask {
    /// Take the baseline modification time of `target`.
    ///
    /// Fails if the file cannot be stat'ed right now; there is no retry.
    pub fn start(
        target: WatchTarget,
        options: WatchOptions,
        fs: Arc<dyn FileSystem>,
        runner: Arc<dyn CommandRunner>,
    ) -> Result<Self> {
        let baseline = stat(fs.as_ref(), &target.path)?;
        let command = target.command.as_deref().and_then(CommandSpec::parse);

        debug!(path = %target.path.display(), ?baseline, "baseline taken");

        // Only announced once the baseline exists, so any change made after
        // this line is seen by the next poll.
        if !options.quiet {
            Report::Started {
                path: target.path.clone(),
            }
            .emit(&target.path);
        }

        Ok(Self {
            target,
            command,
            options,
            fs,
            runner,
            baseline,
            stats: WatchStats::new(),
        })
    }

    pub fn target(&self) -> &WatchTarget {
        &self.target
    }

    pub fn stats(&self) -> &WatchStats {
        &self.stats
    }

    pub fn baseline(&self) -> SystemTime {
        self.baseline
    }

    /// Poll forever. Only returns on a fatal error.
    pub async fn run(mut self) -> Result<Infallible> {
        loop {
            self.poll_once().await?;
            sleep(self.options.poll_interval).await;
        }
    }

    /// Sample the modification time once and react if it moved.
    ///
    /// Returns `Ok(None)` when nothing changed; in that case no report is
    /// emitted and the statistics are untouched.
    pub async fn poll_once(&mut self) -> Result<Option<Detection>> {
        let current = stat(self.fs.as_ref(), &self.target.path)?;
        let diff = mtime_diff(current, self.baseline);
        if diff.is_zero() {
            trace!(path = %self.target.path.display(), "no change");
            return Ok(None);
        }

        self.baseline = current;
        self.stats.record_modification(diff);

        let mut detection = Detection {
            modified_at: current,
            diff,
            execution: None,
            reports: Vec::new(),
        };

        let WatchOptions { quiet, verbose, .. } = self.options;

        if !quiet {
            self.report(
                &mut detection,
                Report::Modified {
                    path: self.target.path.clone(),
                    at: DateTime::<Local>::from(current),
                },
            );
        }

        match &self.command {
            None => {
                if !quiet && verbose {
                    self.report(&mut detection, Report::NoCommand);
                    self.report_stats(&mut detection);
                }
            }
            Some(spec) => {
                if !quiet {
                    self.report(
                        &mut detection,
                        Report::Executing {
                            command: spec.to_string(),
                        },
                    );
                }

                let output = self.runner.run(spec).await?;
                self.stats.record_execution(output.duration);

                if !quiet && verbose {
                    self.report(
                        &mut detection,
                        Report::CommandOutput {
                            output: output.stdout.clone(),
                        },
                    );
                    self.report_stats(&mut detection);
                }

                detection.execution = Some(output);
            }
        }

        Ok(Some(detection))
    }

    fn report(&self, detection: &mut Detection, report: Report) {
        report.emit(&self.target.path);
        detection.reports.push(report);
    }

    fn report_stats(&self, detection: &mut Detection) {
        // Always present here: a modification was recorded above.
        if let Some(snap) = self.stats.snapshot() {
            self.report(detection, Report::Stats(snap));
        }
    }
}

fn stat(fs: &dyn FileSystem, path: &Path) -> Result<SystemTime> {
    fs.modified(path).map_err(|source| WatchrError::Stat {
        path: path.to_path_buf(),
        source,
    })
}

/// Start a watch task for `target` and poll until it fails.
pub async fn watch(
    target: WatchTarget,
    options: WatchOptions,
    fs: Arc<dyn FileSystem>,
    runner: Arc<dyn CommandRunner>,
) -> Result<Infallible> {
    WatchTask::start(target, options, fs, runner)?.run().await
}
