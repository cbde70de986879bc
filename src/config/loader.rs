// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{ConfigFile, RunConfig};
use crate::errors::{Result, WatchrError};

/// Serialization format of a config file, chosen from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("json") => Ok(ConfigFormat::Json),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            _ => Err(WatchrError::Config(format!(
                "unsupported config file type {:?} (expected .toml, .json, .yaml or .yml)",
                path
            ))),
        }
    }

    /// Deserialize `contents` in this format.
    pub fn parse(self, contents: &str) -> Result<ConfigFile> {
        let config: ConfigFile = match self {
            ConfigFormat::Toml => toml::from_str(contents)?,
            ConfigFormat::Json => serde_json::from_str(contents)?,
            ConfigFormat::Yaml => serde_yaml::from_str(contents)?,
        };
        Ok(config)
    }
}

/// Load a configuration file from a given path and return the raw `ConfigFile`.
///
/// This only performs deserialization; it does **not** check invariants like
/// quiet/verbose exclusivity. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let contents = fs::read_to_string(path)?;

    let config = format.parse(&contents)?;
    debug!(?path, ?format, files = config.files.len(), "loaded config file");

    Ok(config)
}

/// Load a configuration file from path and validate it into a `RunConfig`.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<RunConfig> {
    let raw_config = load_from_path(&path)?;
    RunConfig::try_from(raw_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("w.toml")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("w.JSON")).unwrap(), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("a/w.yml")).unwrap(), ConfigFormat::Yaml);
        assert!(ConfigFormat::from_path(Path::new("watchr")).is_err());
        assert!(ConfigFormat::from_path(Path::new("w.ini")).is_err());
    }

    #[test]
    fn same_shape_in_every_format() {
        let toml = r#"
verbose = true

[[files]]
path = "a.txt"
cmd = "echo a"

[[files]]
path = "b.txt"
"#;
        let json = r#"{"verbose": true, "files": [{"path": "a.txt", "cmd": "echo a"}, {"path": "b.txt"}]}"#;
        let yaml = "verbose: true\nfiles:\n  - path: a.txt\n    cmd: echo a\n  - path: b.txt\n";

        for (format, contents) in [
            (ConfigFormat::Toml, toml),
            (ConfigFormat::Json, json),
            (ConfigFormat::Yaml, yaml),
        ] {
            let cfg = format.parse(contents).unwrap();
            assert!(cfg.verbose, "{format:?}");
            assert!(!cfg.quiet, "{format:?}");
            assert_eq!(cfg.files.len(), 2, "{format:?}");
            assert_eq!(cfg.files[0].cmd.as_deref(), Some("echo a"));
            assert_eq!(cfg.files[1].cmd, None);
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = ConfigFormat::Toml.parse("files = [").unwrap_err();
        assert!(matches!(err, WatchrError::Toml(_)));
    }
}
