// src/engine/supervisor.rs

use std::path::PathBuf;
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, error};

use crate::config::RunConfig;
use crate::errors::{Result, WatchrError};
use crate::exec::CommandRunner;
use crate::fs::FileSystem;
use crate::types::FailurePolicy;
use crate::watch::{watch, WatchOptions};

/// Fans out one watch task per configured target and waits on them.
///
/// Watch tasks never finish on their own, so under normal operation
/// [`Supervisor::run`] never returns; the process is stopped by the interrupt
/// handler or by a failing task.
pub struct Supervisor {
    config: Arc<RunConfig>,
    fs: Arc<dyn FileSystem>,
    runner: Arc<dyn CommandRunner>,
}

impl Supervisor {
    pub fn new(
        config: RunConfig,
        fs: Arc<dyn FileSystem>,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            fs,
            runner,
        }
    }

    /// Spawn every watch task and wait.
    ///
    /// - `FailurePolicy::Exit`: the first task error is returned immediately;
    ///   remaining tasks are aborted when the `JoinSet` drops.
    /// - `FailurePolicy::Isolate`: failures are logged and the survivors keep
    ///   running; `AllTasksFailed` is returned once none is left.
    pub async fn run(self) -> Result<()> {
        let options = WatchOptions::from(self.config.as_ref());
        let mut tasks: JoinSet<(PathBuf, Result<std::convert::Infallible>)> = JoinSet::new();

        for target in self.config.targets.iter().cloned() {
            let fs = Arc::clone(&self.fs);
            let runner = Arc::clone(&self.runner);
            tasks.spawn(async move {
                let path = target.path.clone();
                (path, watch(target, options, fs, runner).await)
            });
        }

        let total = tasks.len();
        debug!(tasks = total, policy = ?self.config.failure_policy, "watch tasks started");

        let mut failed = 0usize;
        while let Some(joined) = tasks.join_next().await {
            let (path, err) = match joined {
                Ok((path, Err(err))) => (Some(path), err),
                Ok((_, Ok(never))) => match never {},
                Err(join_err) => (None, WatchrError::TaskPanicked(join_err.to_string())),
            };

            match self.config.failure_policy {
                FailurePolicy::Exit => return Err(err),
                FailurePolicy::Isolate => {
                    failed += 1;
                    error!(
                        path = ?path,
                        error = %err,
                        remaining = total - failed,
                        "watch task stopped"
                    );
                }
            }
        }

        Err(WatchrError::AllTasksFailed(failed))
    }
}
