#![allow(dead_code)]

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant, SystemTime};

pub const WAIT: Duration = Duration::from_secs(10);

/// A running `watchr` binary whose stderr is read line by line.
pub struct Spawned {
    pub child: Child,
    lines: Receiver<String>,
    pub seen: Vec<String>,
}

impl Spawned {
    pub fn start(args: &[&str]) -> Self {
        let mut child = Command::new(env!("CARGO_BIN_EXE_watchr"))
            .args(args)
            .args(["--poll-interval", "20ms"])
            .env("NO_COLOR", "1")
            .env_remove("WATCHR_LOG")
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawning watchr");

        let stderr = child.stderr.take().expect("stderr is piped");
        let (tx, lines) = mpsc::channel();
        thread::spawn(move || {
            for line in BufReader::new(stderr).lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });

        Self {
            child,
            lines,
            seen: Vec::new(),
        }
    }

    /// Block until a stderr line contains `needle`; panics after [`WAIT`].
    pub fn wait_for(&mut self, needle: &str) -> String {
        let deadline = Instant::now() + WAIT;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            match self.lines.recv_timeout(left) {
                Ok(line) => {
                    self.seen.push(line.clone());
                    if line.contains(needle) {
                        return line;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    panic!("timed out waiting for {needle:?}; seen: {:#?}", self.seen)
                }
                Err(RecvTimeoutError::Disconnected) => {
                    panic!("watchr exited before printing {needle:?}; seen: {:#?}", self.seen)
                }
            }
        }
    }

    /// Wait for the process to exit and collect whatever stderr is left.
    pub fn wait_exit(&mut self) -> (ExitStatus, Vec<String>) {
        let deadline = Instant::now() + WAIT;
        let status = loop {
            if let Some(status) = self.child.try_wait().expect("polling child") {
                break status;
            }
            if Instant::now() > deadline {
                let _ = self.child.kill();
                panic!("watchr did not exit; seen: {:#?}", self.seen);
            }
            thread::sleep(Duration::from_millis(20));
        };

        let rest: Vec<String> = self.lines.iter().collect();
        self.seen.extend(rest.iter().cloned());
        (status, rest)
    }

    pub fn count_seen(&self, needle: &str) -> usize {
        self.seen.iter().filter(|l| l.contains(needle)).count()
    }
}

impl Drop for Spawned {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Set the modification time of `path` to `secs` seconds after the epoch.
pub fn touch_at(path: &Path, secs: u64) {
    let file = File::options().write(true).open(path).expect("opening file to touch");
    file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .expect("setting mtime");
}
