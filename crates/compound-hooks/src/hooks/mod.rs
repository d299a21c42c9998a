//! The individual lifecycle hooks.
//!
//! Each hook's `run` takes the project root (and any injected state) and
//! returns the stderr lines it wants printed, which keeps the hooks
//! testable against a temp directory without capturing process output.

use std::path::{Path, PathBuf};

pub mod pre_compact;
pub mod session_end;
pub mod suggest_compact;

/// `docs/STATE.md`: the session's durable working state, written by the
/// assistant via /pause.
pub(crate) fn state_file(project_root: &Path) -> PathBuf {
    project_root.join("docs").join("STATE.md")
}

/// `docs/progress.md`: the append-only session log.
pub(crate) fn progress_file(project_root: &Path) -> PathBuf {
    project_root.join("docs").join("progress.md")
}

/// `.continue-here.md`: the handoff file /resume picks up.
pub(crate) fn continue_file(project_root: &Path) -> PathBuf {
    project_root.join(".continue-here.md")
}
