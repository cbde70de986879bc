// src/config/mod.rs

//! Configuration loading and resolution for watchr.
//!
//! Responsibilities:
//! - Define the file-backed data model and the resolved `RunConfig` (`model.rs`).
//! - Load a config file from disk in TOML, JSON or YAML (`loader.rs`).
//! - Validate invariants and turn CLI flags or a config file into a
//!   `RunConfig` (`validate.rs`).
//! - Parse human duration strings like `"250ms"` (`duration.rs`).

pub mod duration;
pub mod loader;
pub mod model;
pub mod validate;

pub use duration::parse_duration;
pub use loader::{load_and_validate, load_from_path, ConfigFormat};
pub use model::{ConfigFile, FileEntry, RunConfig, WatchTarget, DEFAULT_POLL_INTERVAL};
pub use validate::resolve;
