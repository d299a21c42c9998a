//! Shared bookkeeping types for the Super Compound hooks
//!
//! - CounterState / CounterStore: per-project daily tool-call counter
//! - ReminderConfig: compaction reminder thresholds and the decision logic
//! - statedoc: STATE.md compaction-note editing
//!
//! Everything here is synchronous and best-effort: hooks attach to live
//! tool calls, so no failure in this crate may propagate to an exit code.

mod counter;
mod fs;
mod reminder;
mod time;

pub mod statedoc;

pub use counter::*;
pub use fs::*;
pub use reminder::*;
pub use time::*;
