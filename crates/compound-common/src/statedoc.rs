//! STATE.md compaction-note editing.
//!
//! The pre-compact hook stamps `docs/STATE.md` with a `## Last Compaction`
//! section so the next session knows context was compacted and the on-disk
//! docs are the source of truth. The section is appended on first
//! compaction and rewritten in place on later ones.

/// Heading that marks the compaction note inside STATE.md.
pub const COMPACTION_HEADING: &str = "## Last Compaction";

fn compaction_section(timestamp: &str) -> String {
    format!(
        "{COMPACTION_HEADING}\n\n\
         **When:** {timestamp}\n\
         **Note:** Context was compacted. STATE.md, .continue-here.md, and docs/ are preserved on disk.\n\
         **After resume:** Run /reload then /resume to restore full context.\n"
    )
}

/// Append the compaction note, or replace an existing one in place.
///
/// The existing note spans from [`COMPACTION_HEADING`] up to (not
/// including) the next `\n---` or `\n##`, or the end of the document, so
/// sections written after the note survive the rewrite.
pub fn upsert_compaction_note(content: &str, timestamp: &str) -> String {
    let section = compaction_section(timestamp);
    match content.find(COMPACTION_HEADING) {
        None => format!("{content}\n\n---\n{section}"),
        Some(start) => {
            let after_heading = start + COMPACTION_HEADING.len();
            let tail = &content[after_heading..];
            let end = ["\n---", "\n##"]
                .iter()
                .filter_map(|marker| tail.find(marker))
                .min()
                .map(|offset| after_heading + offset)
                .unwrap_or(content.len());
            format!("{}{}{}", &content[..start], section, &content[end..])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_compaction_appends_note() {
        let content = "# State\n\nWorking on the parser.\n";
        let updated = upsert_compaction_note(content, "2026-08-30 12:00");
        assert!(updated.starts_with(content));
        assert!(updated.contains("\n\n---\n## Last Compaction\n"));
        assert!(updated.contains("**When:** 2026-08-30 12:00"));
    }

    #[test]
    fn second_compaction_replaces_timestamp() {
        let content = "# State\n";
        let first = upsert_compaction_note(content, "2026-08-30 12:00");
        let second = upsert_compaction_note(&first, "2026-08-30 14:30");
        assert!(!second.contains("12:00"));
        assert!(second.contains("**When:** 2026-08-30 14:30"));
        assert_eq!(second.matches(COMPACTION_HEADING).count(), 1);
    }

    #[test]
    fn replacement_preserves_trailing_sections() {
        let content = "# State\n\n## Last Compaction\n\n**When:** old\n\n## Next Steps\n\n- finish tests\n";
        let updated = upsert_compaction_note(content, "2026-08-30 09:15");
        assert!(updated.contains("**When:** 2026-08-30 09:15"));
        assert!(updated.contains("\n## Next Steps\n\n- finish tests\n"));
        assert!(!updated.contains("**When:** old"));
    }

    #[test]
    fn replacement_stops_at_horizontal_rule() {
        let content = "## Last Compaction\n\n**When:** old\n\n---\nfooter\n";
        let updated = upsert_compaction_note(content, "2026-08-30 09:15");
        assert!(updated.contains("\n---\nfooter\n"));
        assert!(!updated.contains("old"));
    }

    #[test]
    fn note_at_end_replaces_to_end() {
        let content = "# State\n\n---\n## Last Compaction\n\n**When:** old\ntrailing text";
        let updated = upsert_compaction_note(content, "2026-08-30 09:15");
        assert!(updated.starts_with("# State\n\n---\n## Last Compaction\n"));
        assert!(!updated.contains("trailing text"));
        assert!(updated.ends_with("restore full context.\n"));
    }
}
