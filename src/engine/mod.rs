//! Redirect decision: the orchestrator tying parser, registry, resolver,
//! history and navigation together.
//!
//! Each submission runs one full cycle: record into history, parse, look up
//! the trigger, and dispatch either to the matched provider (new context) or
//! to the default web search with the entire raw input (replacing the
//! current context).
//!
//! # Error Handling Strategy
//!
//! - **Unresolvable trigger**: not an error; silently falls back to the
//!   default search with the raw input un-stripped.
//! - **History persistence failure**: logged and swallowed; the redirect
//!   always proceeds.
//! - **Navigation failure**: the only error this module propagates, since
//!   without it the user's primary action did not happen.

use std::path::PathBuf;

use anyhow::Result;
use log::warn;

use crate::dispatch::Navigator;
use crate::history::{HistoryLog, load_history, save_history};
use crate::query::{encode_search_term, parse_query, resolve_url};
use crate::registry::Registry;

/// Destination when no trigger matches
const DEFAULT_SEARCH_TEMPLATE: &str = "https://www.google.com/search?q=";

/// Default web search URL for a raw query string
pub fn default_search_url(raw: &str) -> String {
    format!("{DEFAULT_SEARCH_TEMPLATE}{}", encode_search_term(raw))
}

/// Outcome of one submission cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Empty or whitespace-only input; nothing happened
    None,
    /// A trigger resolved; the provider URL was opened in a new context
    Provider { name: String, url: String },
    /// No trigger (or an unresolved one); the full raw input went to the
    /// default search, replacing the current context
    DefaultSearch { url: String },
}

/// The session-scoped search engine.
///
/// Owns the registry and the history log. The registry is read-only after
/// load; the history log is mutated only here.
pub struct SearchEngine {
    registry: Registry,
    history: HistoryLog,
    history_path: Option<PathBuf>,
}

impl SearchEngine {
    /// Engine with in-memory-only history
    pub fn new(registry: Registry) -> Self {
        Self { registry, history: HistoryLog::new(), history_path: None }
    }

    /// Engine backed by a persisted history file. An unreadable file starts
    /// the session with an empty log rather than failing.
    pub fn with_history_file(registry: Registry, path: PathBuf) -> Self {
        let history = match load_history(&path) {
            Ok(entries) => HistoryLog::from_entries(entries),
            Err(e) => {
                warn!("Starting with empty history: {e:#}");
                HistoryLog::new()
            }
        };
        Self { registry, history, history_path: Some(path) }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Decide the dispatch for a raw input without side effects
    pub fn decide(&self, raw: &str) -> Dispatch {
        if raw.trim().is_empty() {
            return Dispatch::None;
        }

        let parsed = parse_query(raw);
        if let Some(trigger) = &parsed.trigger
            && let Some(def) = self.registry.lookup(trigger)
        {
            return Dispatch::Provider {
                name: def.name.clone(),
                url: resolve_url(def, &parsed.remainder),
            };
        }

        // No trigger, or trigger present but unresolved: the full raw input,
        // bang text included, goes to the default search
        Dispatch::DefaultSearch { url: default_search_url(raw) }
    }

    /// Run one full submission cycle: record history, decide, dispatch.
    ///
    /// Only navigation failures propagate; everything else degrades silently.
    pub fn submit(&mut self, raw: &str, navigator: &mut dyn Navigator) -> Result<Dispatch> {
        let dispatch = self.decide(raw);
        if dispatch == Dispatch::None {
            return Ok(Dispatch::None);
        }

        if self.history.record(raw) {
            self.persist_history();
        }

        match &dispatch {
            Dispatch::Provider { url, .. } => navigator.open_new_context(url)?,
            Dispatch::DefaultSearch { url } => navigator.replace_current_context(url)?,
            Dispatch::None => {}
        }

        Ok(dispatch)
    }

    /// Clear the history log and its persisted file
    pub fn clear_history(&mut self) {
        self.history.clear();
        if let Some(path) = &self.history_path
            && let Err(e) = crate::history::clear_history(path)
        {
            warn!("Failed to clear persisted history: {e:#}");
        }
    }

    fn persist_history(&self) {
        let Some(path) = &self.history_path else {
            return;
        };
        if let Err(e) = save_history(path, self.history.entries()) {
            warn!("Failed to persist history: {e:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::RecordingNavigator;
    use crate::registry::default_definitions;

    fn engine() -> SearchEngine {
        SearchEngine::new(Registry::new(default_definitions()))
    }

    #[test]
    fn test_resolved_bang_opens_new_context() {
        let mut engine = engine();
        let mut navigator = RecordingNavigator::new();

        let dispatch = engine.submit("!g openai", &mut navigator).unwrap();
        assert_eq!(
            dispatch,
            Dispatch::Provider {
                name: "Google".to_string(),
                url: "https://www.google.com/search?q=openai".to_string(),
            }
        );
        assert_eq!(navigator.opened, ["https://www.google.com/search?q=openai"]);
        assert!(navigator.replaced.is_empty());
    }

    #[test]
    fn test_unresolved_bang_falls_back_with_raw_input() {
        let mut engine = engine();
        let mut navigator = RecordingNavigator::new();

        let dispatch = engine.submit("!zzznotreal test", &mut navigator).unwrap();
        let expected = default_search_url("!zzznotreal test");
        assert_eq!(dispatch, Dispatch::DefaultSearch { url: expected.clone() });
        // Full raw string, bang text un-stripped, replacing the current context
        assert_eq!(navigator.replaced, [expected]);
        assert!(navigator.opened.is_empty());
    }

    #[test]
    fn test_plain_query_goes_to_default_search() {
        let mut engine = engine();
        let mut navigator = RecordingNavigator::new();

        let dispatch = engine.submit("hello world", &mut navigator).unwrap();
        assert_eq!(
            dispatch,
            Dispatch::DefaultSearch { url: default_search_url("hello world") }
        );
        assert_eq!(navigator.replaced, ["https://www.google.com/search?q=hello%20world"]);
    }

    #[test]
    fn test_empty_input_is_a_noop() {
        let mut engine = engine();
        let mut navigator = RecordingNavigator::new();

        assert_eq!(engine.submit("   ", &mut navigator).unwrap(), Dispatch::None);
        assert!(navigator.opened.is_empty());
        assert!(navigator.replaced.is_empty());
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_empty_remainder_resolves_to_bare_template() {
        let engine = engine();
        let dispatch = engine.decide("!g");
        assert_eq!(
            dispatch,
            Dispatch::Provider {
                name: "Google".to_string(),
                url: "https://www.google.com/search?q=".to_string(),
            }
        );
    }

    #[test]
    fn test_trigger_lookup_is_case_insensitive() {
        let engine = engine();
        let upper = engine.decide("!G query");
        let lower = engine.decide("!g query");
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_submissions_are_recorded_in_history() {
        let mut engine = engine();
        let mut navigator = RecordingNavigator::new();

        engine.submit("!g rust", &mut navigator).unwrap();
        engine.submit("plain query", &mut navigator).unwrap();
        engine.submit("!g rust", &mut navigator).unwrap();

        // Dedup moved the repeat to the front
        assert_eq!(engine.history().entries(), ["!g rust", "plain query"]);
    }

    #[test]
    fn test_decide_has_no_side_effects() {
        let engine = engine();
        engine.decide("!g rust");
        assert!(engine.history().is_empty());
    }
}
