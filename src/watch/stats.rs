// src/watch/stats.rs

use std::time::{Duration, SystemTime};

use chrono::{DateTime, TimeDelta, Utc};
use tracing::warn;

/// Per-task modification statistics.
///
/// Owned by exactly one watch task and only mutated when that task detects a
/// modification. Intervals are signed because a file can be reverted to an
/// older modification time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchStats {
    modification_count: u64,
    last_interval: TimeDelta,
    total_interval: TimeDelta,
    last_execution: Option<Duration>,
}

impl Default for WatchStats {
    fn default() -> Self {
        Self {
            modification_count: 0,
            last_interval: TimeDelta::zero(),
            total_interval: TimeDelta::zero(),
            last_execution: None,
        }
    }
}

impl WatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one detected modification `diff` after the previous one.
    ///
    /// The running total saturates at `TimeDelta::MAX`/`MIN` instead of
    /// wrapping.
    pub fn record_modification(&mut self, diff: TimeDelta) {
        self.modification_count += 1;
        self.last_interval = diff;
        self.total_interval = match self.total_interval.checked_add(&diff) {
            Some(total) => total,
            None => {
                warn!(
                    ?diff,
                    total = ?self.total_interval,
                    "modification interval total overflowed, saturating"
                );
                if diff > TimeDelta::zero() {
                    TimeDelta::MAX
                } else {
                    TimeDelta::MIN
                }
            }
        };
    }

    pub fn record_execution(&mut self, elapsed: Duration) {
        self.last_execution = Some(elapsed);
    }

    pub fn modification_count(&self) -> u64 {
        self.modification_count
    }

    pub fn last_interval(&self) -> TimeDelta {
        self.last_interval
    }

    pub fn total_interval(&self) -> TimeDelta {
        self.total_interval
    }

    pub fn last_execution(&self) -> Option<Duration> {
        self.last_execution
    }

    /// Mean interval between modifications; `None` until the first one.
    pub fn average_interval(&self) -> Option<TimeDelta> {
        if self.modification_count == 0 {
            return None;
        }
        let count = i64::try_from(self.modification_count).unwrap_or(i64::MAX);
        let average = match self.total_interval.num_nanoseconds() {
            Some(nanos) => TimeDelta::nanoseconds(nanos / count),
            None => TimeDelta::milliseconds(self.total_interval.num_milliseconds() / count),
        };
        Some(average)
    }

    /// Values for a stats report. `None` until the first modification.
    pub fn snapshot(&self) -> Option<StatsSnapshot> {
        Some(StatsSnapshot {
            modifications: self.modification_count,
            last_interval: self.last_interval,
            average_interval: self.average_interval()?,
            execution: self.last_execution,
        })
    }
}

/// Point-in-time copy of [`WatchStats`] used in reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub modifications: u64,
    pub last_interval: TimeDelta,
    pub average_interval: TimeDelta,
    pub execution: Option<Duration>,
}

/// Signed difference `current - baseline`.
pub fn mtime_diff(current: SystemTime, baseline: SystemTime) -> TimeDelta {
    DateTime::<Utc>::from(current) - DateTime::<Utc>::from(baseline)
}

/// Render a signed interval the way `Duration`'s `Debug` does (`1.5s`,
/// `250ms`), with a leading `-` for negative values.
pub fn format_delta(delta: TimeDelta) -> String {
    match delta.to_std() {
        Ok(d) => format!("{d:?}"),
        Err(_) => format!("-{:?}", delta.abs().to_std().unwrap_or_default()),
    }
}
