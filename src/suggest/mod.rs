//! Live suggestions: bang-registry ranking and network-backed completions.
//!
//! Two independent suggestion paths feed the interactive UI:
//!
//! - **Bang suggestions** ([`ranker`]): local, synchronous, recomputed on
//!   every keystroke against the registry. No debounce.
//!
//! - **Web suggestions** ([`providers`]): network-backed free-text
//!   completions behind a 300ms debounce ([`debounce`]), fetched off-thread
//!   and applied last-write-wins by submission order.
//!
//! # Error Handling Strategy
//!
//! Provider failures never surface to the user: the chain falls through to
//! the next provider and finally synthesizes contextual suggestions, so the
//! worst case is a smaller or generated list, never an error.

pub mod debounce;
pub mod providers;
pub mod ranker;

pub use debounce::{Debouncer, FetchSequence};
pub use providers::{SuggestionFetcher, SuggestionProvider, synthesize_suggestions};
pub use ranker::{BANG_LIST_LIMIT, CHIP_LIST_LIMIT, suggest_for_bang, suggest_for_query};
