// src/errors.rs

//! Crate-wide error type and `Result` alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchrError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("cannot stat {path:?}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot launch '{program}': {source}")]
    CommandLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command '{command}' failed ({}){}", exit_label(.code), stderr_suffix(.stderr))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("watch task panicked: {0}")]
    TaskPanicked(String),

    #[error("all {0} watch task(s) failed")]
    AllTasksFailed(usize),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WatchrError {
    /// True for errors caused by bad user input, which deserve usage help.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            WatchrError::Config(_)
                | WatchrError::Toml(_)
                | WatchrError::Json(_)
                | WatchrError::Yaml(_)
        )
    }
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit status {c}"),
        None => "terminated by signal".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, WatchrError>;
