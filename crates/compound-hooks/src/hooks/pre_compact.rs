//! PreCompact hook: stamp STATE.md before context compaction.
//!
//! Updates the `## Last Compaction` section of `docs/STATE.md` (appending
//! it on first compaction) so a resumed session can see when compaction
//! happened and that the on-disk docs survived it.

use super::{continue_file, state_file};
use compound_common::statedoc::{COMPACTION_HEADING, upsert_compaction_note};
use compound_common::{atomic_write, compaction_timestamp};
use std::path::Path;

pub fn run(project_root: &Path) -> Vec<String> {
    let timestamp = compaction_timestamp();
    let state_path = state_file(project_root);
    let mut lines = Vec::new();

    if state_path.exists() {
        match std::fs::read_to_string(&state_path) {
            Ok(content) => {
                let had_marker = content.contains(COMPACTION_HEADING);
                let updated = upsert_compaction_note(&content, &timestamp);
                match atomic_write(&state_path, updated.as_bytes()) {
                    Ok(()) if had_marker => lines.push(
                        "[Super Compound] Pre-compact: Updated compaction timestamp in STATE.md"
                            .to_string(),
                    ),
                    Ok(()) => lines.push(
                        "[Super Compound] Pre-compact: Updated STATE.md with compaction marker"
                            .to_string(),
                    ),
                    Err(e) => lines.push(format!(
                        "[Super Compound] Pre-compact: Could not update STATE.md: {e}"
                    )),
                }
            }
            Err(e) => lines.push(format!(
                "[Super Compound] Pre-compact: Could not update STATE.md: {e}"
            )),
        }
    } else {
        lines.push(
            "[Super Compound] Pre-compact: No STATE.md found. Run /pause before compacting for best results."
                .to_string(),
        );
    }

    if continue_file(project_root).exists() {
        lines.push(
            "[Super Compound] Pre-compact: .continue-here.md present — /resume will work after compaction"
                .to_string(),
        );
    }

    lines.push(String::new());
    lines.push(format!(
        "[Super Compound] ⚡ Context compaction starting at {timestamp}"
    ));
    lines.push("  Files preserved: STATE.md, .continue-here.md, docs/".to_string());
    lines.push("  After new session: /reload → /resume".to_string());
    lines.push(String::new());

    lines
}
