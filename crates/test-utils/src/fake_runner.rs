use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use watchr::errors::{Result, WatchrError};
use watchr::exec::{CommandOutput, CommandRunner, CommandSpec};

/// Scripted outcome for one fake command run.
#[derive(Debug, Clone)]
pub enum FakeOutcome {
    Success { stdout: String, duration: Duration },
    ExitCode(i32),
    NotFound,
}

impl FakeOutcome {
    pub fn ok(stdout: &str) -> Self {
        FakeOutcome::Success {
            stdout: stdout.to_string(),
            duration: Duration::from_millis(5),
        }
    }
}

/// A fake runner that:
/// - records the argv of every command it is asked to run
/// - replies with scripted outcomes in order, then succeeds with empty output.
#[derive(Debug, Clone, Default)]
pub struct FakeRunner {
    calls: Arc<Mutex<Vec<Vec<String>>>>,
    outcomes: Arc<Mutex<VecDeque<FakeOutcome>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome for the next unscripted run.
    pub fn push_outcome(&self, outcome: FakeOutcome) -> &Self {
        self.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    /// Argv (program first) of every run so far.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl CommandRunner for FakeRunner {
    fn run<'a>(
        &'a self,
        spec: &'a CommandSpec,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + 'a>> {
        Box::pin(async move {
            {
                let mut guard = self.calls.lock().unwrap();
                guard.push(spec.argv().into_iter().map(str::to_string).collect());
            }

            let outcome = self
                .outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| FakeOutcome::ok(""));

            match outcome {
                FakeOutcome::Success { stdout, duration } => Ok(CommandOutput { stdout, duration }),
                FakeOutcome::ExitCode(code) => Err(WatchrError::CommandFailed {
                    command: spec.to_string(),
                    code: Some(code),
                    stderr: String::new(),
                }),
                FakeOutcome::NotFound => Err(WatchrError::CommandLaunch {
                    program: spec.program.clone(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
                }),
            }
        })
    }
}
