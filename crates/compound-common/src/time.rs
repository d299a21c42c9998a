//! Timestamp helpers for counter epochs and compaction markers.

use chrono::{Local, Utc};

/// Local calendar-day key used to scope the tool-call counter, e.g.
/// `2026-08-30`. A stored record with a different key belongs to a past
/// epoch and is discarded on read.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// UTC minute-resolution timestamp written into STATE.md compaction
/// markers, e.g. `2026-08-30 12:45`.
pub fn compaction_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_is_a_date_key() {
        let key = today();
        assert_eq!(key.len(), 10);
        assert_eq!(key.as_bytes()[4], b'-');
        assert_eq!(key.as_bytes()[7], b'-');
    }

    #[test]
    fn compaction_timestamp_is_minute_resolution() {
        let ts = compaction_timestamp();
        // "YYYY-MM-DD HH:MM"
        assert_eq!(ts.len(), 16);
        assert_eq!(ts.as_bytes()[10], b' ');
        assert_eq!(ts.as_bytes()[13], b':');
    }
}
