//! Super Compound — lifecycle hooks for AI coding sessions.
//!
//! Invoked by the session manager at lifecycle events. Each subcommand
//! performs best-effort bookkeeping on small project-local files, prints
//! its status text to stderr, then echoes stdin back to stdout so hook
//! output can be chained. Hooks always exit 0: bookkeeping must never
//! fail the tool call it is attached to.

use clap::Parser;
use compound_common::{FileCounterStore, ReminderConfig};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

mod hooks;

#[derive(Parser)]
#[command(name = "compound-hook", about = "Super Compound lifecycle hooks")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// PreCompact: stamp STATE.md so state survives context compaction
    PreCompact,
    /// SessionEnd: print the end-of-session checklist
    SessionEnd,
    /// PreToolUse (Edit/Write): count tool calls, suggest /pause at thresholds
    SuggestCompact,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env("COMPOUND_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let project_root = std::env::current_dir().unwrap_or_else(|e| {
        warn!("failed to resolve working directory: {e}");
        PathBuf::from(".")
    });

    let report = match cli.command {
        Command::PreCompact => hooks::pre_compact::run(&project_root),
        Command::SessionEnd => hooks::session_end::run(&project_root),
        Command::SuggestCompact => {
            let store = FileCounterStore::new(&project_root);
            hooks::suggest_compact::run(&store, &ReminderConfig::from_env())
        }
    };

    for line in &report {
        eprintln!("{line}");
    }

    pass_through();
}

/// Echo stdin to stdout unchanged. The host chains hook output into its
/// own pipeline, so the payload must stay byte-identical; an empty stream
/// becomes the literal `{}`.
fn pass_through() {
    let mut input = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut input) {
        warn!("failed to read stdin: {e}");
        input.clear();
    }
    let mut out = io::stdout().lock();
    if let Err(e) = out.write_all(pass_through_payload(&input)) {
        warn!("failed to write pass-through payload: {e}");
    }
    let _ = out.flush();
}

fn pass_through_payload(input: &[u8]) -> &[u8] {
    if input.is_empty() { b"{}" } else { input }
}

#[cfg(test)]
mod tests {
    use super::pass_through_payload;

    #[test]
    fn non_empty_input_passes_through_untouched() {
        let input = br#"{"hook_event_name":"PreCompact","session_id":"s1"}"#;
        assert_eq!(pass_through_payload(input), input);
    }

    #[test]
    fn binary_input_passes_through_untouched() {
        let input = [0u8, 159, 146, 150, b'\n'];
        assert_eq!(pass_through_payload(&input), &input);
    }

    #[test]
    fn empty_input_becomes_empty_object() {
        assert_eq!(pass_through_payload(b""), b"{}");
    }
}
