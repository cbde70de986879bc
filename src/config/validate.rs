// src/config/validate.rs

use crate::cli::CliArgs;
use crate::config::duration::parse_duration;
use crate::config::loader::load_from_path;
use crate::config::model::{ConfigFile, FileEntry, RunConfig, WatchTarget, DEFAULT_POLL_INTERVAL};
use crate::errors::{Result, WatchrError};

impl TryFrom<ConfigFile> for RunConfig {
    type Error = WatchrError;

    fn try_from(raw: ConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;

        let poll_interval = match raw.poll_interval.as_deref() {
            Some(s) => parse_duration(s)
                .map_err(|e| WatchrError::Config(format!("invalid poll_interval: {e}")))?,
            None => DEFAULT_POLL_INTERVAL,
        };
        if poll_interval.is_zero() {
            return Err(WatchrError::Config(
                "poll_interval must be greater than zero".to_string(),
            ));
        }

        let targets = raw
            .files
            .into_iter()
            .map(|entry| WatchTarget::new(entry.path, entry.cmd))
            .collect();

        Ok(RunConfig::new_unchecked(
            raw.quiet,
            raw.verbose,
            targets,
            poll_interval,
            raw.on_failure.unwrap_or_default(),
        ))
    }
}

fn validate_raw_config(cfg: &ConfigFile) -> Result<()> {
    ensure_has_files(cfg)?;
    validate_verbosity(cfg)?;
    validate_paths(cfg)?;
    Ok(())
}

fn ensure_has_files(cfg: &ConfigFile) -> Result<()> {
    if cfg.files.is_empty() {
        return Err(WatchrError::Config(
            "config must declare at least one entry in `files`".to_string(),
        ));
    }
    Ok(())
}

fn validate_verbosity(cfg: &ConfigFile) -> Result<()> {
    if cfg.quiet && cfg.verbose {
        return Err(WatchrError::Config(
            "quiet and verbose are mutually exclusive".to_string(),
        ));
    }
    Ok(())
}

fn validate_paths(cfg: &ConfigFile) -> Result<()> {
    for (idx, entry) in cfg.files.iter().enumerate() {
        if entry.path.trim().is_empty() {
            return Err(WatchrError::Config(format!(
                "files[{idx}] has an empty `path`"
            )));
        }
    }
    Ok(())
}

/// Turn parsed CLI flags into a validated `RunConfig`.
///
/// With `--cfg`, the file supplies everything and `--poll-interval` /
/// `--on-failure` override it. Otherwise `--file` and `--cmd` describe a single
/// target (direct mode).
pub fn resolve(args: &CliArgs) -> Result<RunConfig> {
    let mut raw = match (&args.cfg, &args.file) {
        (Some(cfg), None) => load_from_path(cfg)?,
        (None, Some(file)) => ConfigFile {
            quiet: args.quiet,
            verbose: args.verbose,
            files: vec![FileEntry {
                path: file.clone(),
                cmd: args.cmd.clone(),
            }],
            ..ConfigFile::default()
        },
        (Some(_), Some(_)) => {
            return Err(WatchrError::Config(
                "the --cfg flag cannot be used with any other flags".to_string(),
            ));
        }
        (None, None) => {
            return Err(WatchrError::Config(
                "the --cfg flag with config or --file flag with file path is required".to_string(),
            ));
        }
    };

    if let Some(interval) = &args.poll_interval {
        raw.poll_interval = Some(interval.clone());
    }
    if let Some(policy) = args.on_failure {
        raw.on_failure = Some(policy);
    }

    RunConfig::try_from(raw)
}
