//! Bounded search history with dedup-to-front policy.
//!
//! The policy (cap, dedup, most-recent-first ordering) lives here in the
//! core; the [`persistence`] submodule only loads and saves the resulting
//! list. Persistence failures degrade the feature to in-memory-only for the
//! session and are never fatal to a search.

pub mod persistence;

pub use persistence::{clear_history, default_history_path, load_history, save_history};

/// Maximum number of retained history entries
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// In-memory history log, most-recent-first.
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<String>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a log from persisted entries, re-applying the cap in case the
    /// stored file predates it or was edited by hand
    pub fn from_entries(entries: Vec<String>) -> Self {
        let mut log = Self { entries };
        log.entries.truncate(MAX_HISTORY_ENTRIES);
        log
    }

    /// Record a query at the front, removing any prior exact duplicate and
    /// enforcing the cap. Blank queries are ignored. Returns whether the log
    /// changed.
    pub fn record(&mut self, query: &str) -> bool {
        if query.trim().is_empty() {
            return false;
        }

        self.entries.retain(|entry| entry != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(MAX_HISTORY_ENTRIES);
        true
    }

    /// Entries most-recent-first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_inserts_at_front() {
        let mut log = HistoryLog::new();
        log.record("first");
        log.record("second");
        assert_eq!(log.entries(), ["second", "first"]);
    }

    #[test]
    fn test_duplicate_moves_to_front() {
        let mut log = HistoryLog::new();
        log.record("a");
        log.record("b");
        log.record("a");
        assert_eq!(log.entries(), ["a", "b"]);
    }

    #[test]
    fn test_dedup_is_exact_string_match() {
        let mut log = HistoryLog::new();
        log.record("Rust");
        log.record("rust");
        // Different case, both retained
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_cap_keeps_fifty_most_recent() {
        let mut log = HistoryLog::new();
        for i in 0..51 {
            log.record(&format!("query {i}"));
        }
        assert_eq!(log.len(), MAX_HISTORY_ENTRIES);
        assert_eq!(log.entries()[0], "query 50");
        assert_eq!(log.entries()[MAX_HISTORY_ENTRIES - 1], "query 1");
    }

    #[test]
    fn test_blank_queries_ignored() {
        let mut log = HistoryLog::new();
        assert!(!log.record(""));
        assert!(!log.record("   "));
        assert!(log.is_empty());
    }

    #[test]
    fn test_from_entries_reapplies_cap() {
        let oversized: Vec<String> = (0..80).map(|i| format!("q{i}")).collect();
        let log = HistoryLog::from_entries(oversized);
        assert_eq!(log.len(), MAX_HISTORY_ENTRIES);
        assert_eq!(log.entries()[0], "q0");
    }

    #[test]
    fn test_clear() {
        let mut log = HistoryLog::new();
        log.record("something");
        log.clear();
        assert!(log.is_empty());
    }
}
