//! Compaction reminder thresholds and the decision logic.
//!
//! The suggest-compact hook fires once at `threshold` tool calls, then
//! every `reminder_interval` calls after that. Both knobs come from the
//! environment so users can tune them per shell or per project.

use crate::counter::CounterState;
use std::str::FromStr;

/// Tool calls before the first reminder.
pub const DEFAULT_THRESHOLD: u64 = 50;
/// Calls between reminders after the first.
pub const DEFAULT_REMINDER_INTERVAL: i64 = 25;

pub const THRESHOLD_ENV: &str = "COMPACT_THRESHOLD";
pub const REMINDER_INTERVAL_ENV: &str = "COMPACT_REMINDER_INTERVAL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderConfig {
    pub threshold: u64,
    /// Zero or negative disables repeat reminders: only the exact
    /// threshold hit fires.
    pub reminder_interval: i64,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            reminder_interval: DEFAULT_REMINDER_INTERVAL,
        }
    }
}

impl ReminderConfig {
    /// Resolve from `COMPACT_THRESHOLD` / `COMPACT_REMINDER_INTERVAL`.
    /// Absent or unparseable values fall back to the defaults, so garbage
    /// input keeps the default reminder cadence rather than silently
    /// disabling reminders.
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var(THRESHOLD_ENV).ok().as_deref(),
            std::env::var(REMINDER_INTERVAL_ENV).ok().as_deref(),
        )
    }

    fn resolve(threshold: Option<&str>, interval: Option<&str>) -> Self {
        Self {
            threshold: parse_or(threshold, DEFAULT_THRESHOLD),
            reminder_interval: parse_or(interval, DEFAULT_REMINDER_INTERVAL),
        }
    }
}

fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

/// Advance the counter by one call and decide whether a reminder fires.
///
/// Pure state transition: the caller persists the returned state and the
/// persisted record is updated whether or not the reminder fires. The
/// increment happens before the threshold comparison, so with
/// `threshold == 0` the first call (count 1) does not fire; only the
/// repeat-interval branch can.
pub fn advance(state: &CounterState, config: &ReminderConfig) -> (CounterState, bool) {
    let next = CounterState {
        count: state.count + 1,
        date: state.date.clone(),
    };
    let remind = should_remind(next.count, config);
    (next, remind)
}

/// The threshold check on its own: fires at exactly `threshold`, then at
/// every positive `reminder_interval` past it.
pub fn should_remind(count: u64, config: &ReminderConfig) -> bool {
    if count == config.threshold {
        return true;
    }
    if count > config.threshold && config.reminder_interval > 0 {
        return (count - config.threshold) % config.reminder_interval as u64 == 0;
    }
    false
}
