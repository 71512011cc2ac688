//! Core domain models for noun-sieve.
//!
//! Tokens produced by an analyzer, the tag predicate that selects which of
//! them survive, and the per-line result object. These are pure domain models
//! with no I/O dependencies.

pub mod filter;
pub mod result;
pub mod token;

pub use filter::{DEFAULT_EXACT_TAGS, DEFAULT_PREFIX_TAGS, TagFilter};
pub use result::FilterResult;
pub use token::Token;
