// src/watch/mod.rs

//! Modification-time polling and reaction.
//!
//! This module is responsible for:
//! - Sampling a file's modification time and detecting changes against a
//!   baseline (`task.rs`).
//! - Per-task statistics about detected modifications (`stats.rs`).
//! - The progress reports a task emits (`report.rs`).
//!
//! It does **not** know about other watched files; each task is independent.

pub mod report;
pub mod stats;
pub mod task;

pub use report::Report;
pub use stats::{format_delta, mtime_diff, StatsSnapshot, WatchStats};
pub use task::{watch, Detection, WatchOptions, WatchTask};
