//! PreToolUse hook: count Edit/Write calls and suggest /pause at
//! thresholds.
//!
//! Every invocation advances the per-project daily counter. When the count
//! hits the configured threshold (and then at every reminder interval past
//! it) the checkpoint guidance block is printed to stderr. The counter is
//! persisted whether or not the reminder fires; a failed write is logged
//! and otherwise ignored so the tool call is never blocked.

use compound_common::{CounterStore, ReminderConfig, advance};
use tracing::warn;

pub fn run(store: &impl CounterStore, config: &ReminderConfig) -> Vec<String> {
    let state = store.load();
    let (next, remind) = advance(&state, config);

    if let Err(e) = store.save(&next) {
        warn!("failed to persist tool-call counter: {e}");
    }

    if !remind {
        return Vec::new();
    }

    vec![
        String::new(),
        format!(
            "[Super Compound] 🧠 Context checkpoint — {} tool calls this session",
            next.count
        ),
        String::new(),
        "  Consider whether to compact context at this logical boundary:".to_string(),
        String::new(),
        "  COMPACT if:".to_string(),
        "    → You just finished a planning/research phase".to_string(),
        "    → You completed a major milestone".to_string(),
        "    → Debug traces are polluting context for new work".to_string(),
        String::new(),
        "  SKIP if:".to_string(),
        "    → Mid-implementation (would lose file/variable context)".to_string(),
        "    → Tests actively reference recent code changes".to_string(),
        String::new(),
        "  Run: /pause   → save state + create handoff → start fresh session".to_string(),
        "  Or:  /compact → compact in-place (keep conversation going)".to_string(),
        String::new(),
    ]
}
