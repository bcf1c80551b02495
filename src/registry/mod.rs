//! Bang registry: the ordered collection of known shorthand definitions.
//!
//! # Error Handling Strategy
//!
//! The registry must never leave the application without definitions:
//!
//! - **Dataset failures**: a malformed or empty dataset is logged and replaced
//!   by a small built-in fallback set, so basic operation always continues.
//!
//! - **Duplicate triggers**: tolerated; lookup returns the first match in
//!   registry order. Duplicates are a data-quality issue, not a resolver error.

pub mod loader;

use crate::models::BangDefinition;

pub use loader::{default_definitions, load_embedded, parse_dataset};

/// Triggers surfaced in the quick-access listing, in display order
const POPULAR_TRIGGERS: &[&str] = &[
    "g", "w", "yt", "gh", "so", "reddit", "twitter", "chatgpt", "amazon", "netflix", "spotify",
    "maps", "translate", "weather",
];

/// Ordered, read-only collection of bang definitions.
///
/// Loaded once per session; order is insertion order from the dataset. Order
/// has no meaning for resolution (lookup is by trigger) but determines
/// suggestion ordering when multiple entries match.
#[derive(Debug, Clone)]
pub struct Registry {
    definitions: Vec<BangDefinition>,
}

impl Registry {
    pub fn new(definitions: Vec<BangDefinition>) -> Self {
        Self { definitions }
    }

    /// Number of definitions in the registry
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Case-insensitive exact match against triggers; first match wins when
    /// the dataset carries duplicates
    pub fn lookup(&self, trigger: &str) -> Option<&BangDefinition> {
        self.definitions.iter().find(|def| def.trigger.eq_ignore_ascii_case(trigger))
    }

    /// Entries whose trigger, name, category or subcategory contains the
    /// search term (case-insensitive substring, OR across the four fields),
    /// in registry order, truncated to `limit`.
    ///
    /// An empty search term matches everything, so "just `!`" shows the top
    /// entries of the registry.
    pub fn filter(&self, search_term: &str, limit: usize) -> Vec<&BangDefinition> {
        let needle = search_term.to_lowercase();
        self.definitions.iter().filter(|def| matches_needle(def, &needle)).take(limit).collect()
    }

    /// Full registry snapshot in registry order. Consuming views apply their
    /// own display cap (e.g. first 50 for the expanded chip listing).
    pub fn all(&self) -> &[BangDefinition] {
        &self.definitions
    }

    /// Entries from the fixed popular-trigger list, in registry order
    pub fn popular(&self) -> Vec<&BangDefinition> {
        self.definitions
            .iter()
            .filter(|def| POPULAR_TRIGGERS.contains(&def.trigger.as_str()))
            .collect()
    }
}

fn matches_needle(def: &BangDefinition, needle: &str) -> bool {
    def.trigger.to_lowercase().contains(needle)
        || def.name.to_lowercase().contains(needle)
        || def.category.to_lowercase().contains(needle)
        || def.subcategory.to_lowercase().contains(needle)
}
