//! Data models for the bang search launcher.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`RawBang`] - Raw dataset records with short field names (`t/s/u/c/sc/d`)
//! - [`BangDefinition`] - The descriptive shape used everywhere past the loader
//! - [`ParsedQuery`] - The trigger/remainder split of a raw input string
//!
//! The short-field shape exists only at the deserialization boundary; it is
//! mapped to [`BangDefinition`] immediately and never propagated further.

pub mod bang;
pub mod query;

pub use bang::{BangDefinition, RawBang};
pub use query::ParsedQuery;
