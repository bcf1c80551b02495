use std::time::{Duration, Instant};

/// Input quiescence required before a network suggestion fetch is issued
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(300);

/// Holds the most recent input until it has been quiet long enough.
///
/// Each new submission replaces the pending one, so at most one fetch is
/// triggered per burst of typing. The registry-backed suggestion path does
/// not go through here; only the network-backed path is debounced.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self { quiet, pending: None }
    }

    /// Replace the pending query and restart the quiescence clock
    pub fn submit(&mut self, query: &str) {
        self.pending = Some((query.to_string(), Instant::now()));
    }

    /// Drop the pending query without firing (panel dismissed, input cleared)
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Take the pending query if the quiet interval has elapsed
    pub fn ready(&mut self) -> Option<String> {
        let elapsed = self.pending.as_ref().map(|(_, at)| at.elapsed())?;
        if elapsed >= self.quiet {
            return self.pending.take().map(|(query, _)| query);
        }
        None
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_INTERVAL)
    }
}

/// Monotonic tickets for in-flight suggestion fetches.
///
/// Each fetch carries the ticket issued when it started; a result is applied
/// only while its ticket is still the latest. This makes the displayed
/// suggestion set last-write-wins by submission order, not completion order:
/// a slow fetch for a stale query can never overwrite a newer one.
#[derive(Debug, Default)]
pub struct FetchSequence {
    latest: u64,
}

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new fetch, invalidating all earlier ones
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether a result carrying this ticket may still be applied
    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.latest
    }

    /// Invalidate all outstanding tickets without starting a new fetch
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debouncer_not_ready_immediately() {
        let mut debouncer = Debouncer::new(Duration::from_millis(200));
        debouncer.submit("query");
        assert_eq!(debouncer.ready(), None);
    }

    #[test]
    fn test_debouncer_fires_after_quiet_interval() {
        let mut debouncer = Debouncer::new(Duration::ZERO);
        debouncer.submit("query");
        assert_eq!(debouncer.ready(), Some("query".to_string()));
        // Fired once; nothing pending afterwards
        assert_eq!(debouncer.ready(), None);
    }

    #[test]
    fn test_debouncer_newer_input_replaces_pending() {
        let mut debouncer = Debouncer::new(Duration::ZERO);
        debouncer.submit("first");
        debouncer.submit("second");
        assert_eq!(debouncer.ready(), Some("second".to_string()));
    }

    #[test]
    fn test_debouncer_cancel_drops_pending() {
        let mut debouncer = Debouncer::new(Duration::ZERO);
        debouncer.submit("query");
        debouncer.cancel();
        assert_eq!(debouncer.ready(), None);
    }

    #[test]
    fn test_stale_ticket_is_rejected() {
        let mut seq = FetchSequence::new();
        let first = seq.next();
        let second = seq.next();
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
    }

    #[test]
    fn test_invalidate_rejects_all_outstanding() {
        let mut seq = FetchSequence::new();
        let ticket = seq.next();
        seq.invalidate();
        assert!(!seq.is_latest(ticket));
    }
}
