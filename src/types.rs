use clap::ValueEnum;
use serde::Deserialize;

/// Behaviour when a watch task fails (stat failure, failed command).
///
/// - `Exit`: the whole process stops with a non-zero status as soon as any
///   task fails (default).
/// - `Isolate`: only the failing task stops; the others keep watching. The
///   process fails once no task is left running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    #[default]
    Exit,
    Isolate,
}
