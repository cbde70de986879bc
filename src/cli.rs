// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Flag combinations that can never be valid (`--quiet` with `--verbose`,
//! `--cfg` with any direct-mode flag) are rejected here by clap itself, before
//! any config resolution happens.

use clap::{ArgGroup, CommandFactory, Parser, ValueEnum};

use crate::types::FailurePolicy;

/// Command-line arguments for `watchr`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "watchr",
    version,
    about = "Watch given file for modifications and execute commands when they are detected",
    long_about = None
)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["cfg", "file"])
))]
pub struct CliArgs {
    /// Config file path (TOML, JSON or YAML). Not usable with any of the
    /// direct-mode flags.
    #[arg(
        long,
        value_name = "PATH",
        conflicts_with_all = ["file", "cmd", "quiet", "verbose"]
    )]
    pub cfg: Option<String>,

    /// Command to execute when a modification is detected, eg. `curl`.
    #[arg(long, value_name = "COMMAND", requires = "file")]
    pub cmd: Option<String>,

    /// Path to the file to watch for modifications, eg. `foobar.go`.
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,

    /// Quiet operation: suppress all routine output.
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output, including command output and statistics.
    #[arg(long)]
    pub verbose: bool,

    /// Delay between two polls of the same file (e.g. `100ms`, `1s`).
    ///
    /// Overrides `poll_interval` from the config file.
    #[arg(long, value_name = "DURATION")]
    pub poll_interval: Option<String>,

    /// What to do when a watch task fails.
    ///
    /// Overrides `on_failure` from the config file.
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_failure: Option<FailurePolicy>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WATCHR_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and validate the configuration, print the targets, but don't
    /// watch anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

/// Print the full `--help` text to stderr.
pub fn print_usage() {
    let help = CliArgs::command().render_help();
    eprintln!("{help}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn try_parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("watchr").chain(args.iter().copied()))
    }

    #[test]
    fn direct_mode_with_command() {
        let args = try_parse(&["--file", "f.txt", "--cmd", "echo hi", "--verbose"]).unwrap();
        assert_eq!(args.file.as_deref(), Some("f.txt"));
        assert_eq!(args.cmd.as_deref(), Some("echo hi"));
        assert!(args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn quiet_and_verbose_are_rejected() {
        assert!(try_parse(&["--file", "f.txt", "--quiet", "--verbose"]).is_err());
    }

    #[test]
    fn cfg_cannot_be_combined_with_direct_flags() {
        assert!(try_parse(&["--cfg", "w.toml", "--file", "f.txt"]).is_err());
        assert!(try_parse(&["--cfg", "w.toml", "--quiet"]).is_err());
    }

    #[test]
    fn a_source_is_required() {
        assert!(try_parse(&["--verbose"]).is_err());
        assert!(try_parse(&["--cmd", "true"]).is_err());
    }

    #[test]
    fn policy_and_interval_parse() {
        let args = try_parse(&[
            "--cfg",
            "w.toml",
            "--on-failure",
            "isolate",
            "--poll-interval",
            "250ms",
        ])
        .unwrap();
        assert_eq!(args.on_failure, Some(FailurePolicy::Isolate));
        assert_eq!(args.poll_interval.as_deref(), Some("250ms"));
    }
}
