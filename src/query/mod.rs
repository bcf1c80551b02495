//! Query parsing and URL resolution.
//!
//! # Error Handling Strategy
//!
//! Neither operation here can fail:
//!
//! - **Parsing**: an input that does not start with a recognizable trigger is
//!   not an error; it parses to a trigger-less [`ParsedQuery`] carrying the
//!   original string.
//!
//! - **Resolution**: a template without the `{{{s}}}` placeholder is tolerated
//!   and returned unchanged. Template correctness is the dataset author's
//!   responsibility; validating the resulting URL belongs to the navigation
//!   layer.

pub mod parser;
pub mod resolver;

pub use parser::parse_query;
pub use resolver::{PLACEHOLDER, encode_search_term, resolve_url};
