//! bangbox - Bang-powered web search from the terminal
//!
//! This library implements a "bang" search redirector: a query optionally
//! prefixed with a shorthand trigger (e.g. `!g`) is rewritten into a
//! provider-specific search URL, or falls back to a default web search when
//! no trigger matches. It supports:
//!
//! - Parsing raw input into trigger and remainder
//! - A registry of shorthand definitions with lookup and substring filtering
//! - URL template substitution with percent-encoded search terms
//! - Bounded, de-duplicated search history
//! - Live bang and web suggestions for the interactive TUI
//!
//! # Example
//!
//! ```
//! use bangbox::engine::{Dispatch, SearchEngine};
//! use bangbox::registry::load_embedded;
//!
//! let engine = SearchEngine::new(load_embedded());
//! match engine.decide("!g rust lifetimes") {
//!     Dispatch::Provider { url, .. } => {
//!         assert_eq!(url, "https://www.google.com/search?q=rust%20lifetimes");
//!     }
//!     _ => unreachable!("`g` is a registered trigger"),
//! }
//! ```

pub mod cli;
pub mod dispatch;
pub mod engine;
pub mod history;
pub mod models;
pub mod query;
pub mod registry;
pub mod suggest;
pub mod tui;

// Re-export commonly used types
pub use engine::{Dispatch, SearchEngine, default_search_url};
pub use history::HistoryLog;
pub use models::{BangDefinition, ParsedQuery};
pub use query::{parse_query, resolve_url};
pub use registry::Registry;
