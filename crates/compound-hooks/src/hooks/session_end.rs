//! SessionEnd hook: print the end-of-session checklist.
//!
//! Looks at which bookkeeping files exist and nudges toward /pause and
//! /compound so the next session can pick up where this one left off.

use super::{continue_file, progress_file, state_file};
use std::path::Path;

pub fn run(project_root: &Path) -> Vec<String> {
    let has_state = state_file(project_root).exists();
    let has_progress = progress_file(project_root).exists();
    let has_continue = continue_file(project_root).exists();

    let mut lines = vec![
        String::new(),
        "[Super Compound] Session ending. Checklist:".to_string(),
        String::new(),
    ];

    if has_state {
        lines.push("  [✓] STATE.md exists — state is tracked".to_string());
        lines.push("  [ ] If you solved non-trivial problems, run /compound".to_string());
    } else {
        lines.push("  [ ] Consider running /compound to document solutions".to_string());
        lines.push("  [ ] Consider /pause to create a handoff file".to_string());
    }

    if has_progress {
        lines.push("  [✓] docs/progress.md exists — progress log is tracked".to_string());
    }

    if has_continue {
        lines.push("  [✓] .continue-here.md exists — can /resume next session".to_string());
    }

    lines.push(String::new());
    lines.push("[Super Compound] To preserve context across sessions:".to_string());
    lines.push("  - Run /pause before closing".to_string());
    lines.push("  - Or /compound to document solutions".to_string());
    lines.push(String::new());

    lines
}
