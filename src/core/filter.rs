//! Part-of-speech tag predicate.
//!
//! Decides which tokens survive into the emitted `data` list. The default
//! policy keeps general common nouns (any tag starting with `NNG`) and
//! foreign-script tokens (tag exactly `SL`).

use crate::core::{FilterResult, Token};

/// Tag prefixes kept by default.
pub const DEFAULT_PREFIX_TAGS: &[&str] = &["NNG"];

/// Exact tags kept by default.
pub const DEFAULT_EXACT_TAGS: &[&str] = &["SL"];

/// Selects tokens by tag.
///
/// A tag is kept if it starts with any configured prefix or equals any
/// configured exact tag. The prefix test is a literal string prefix, so
/// compound tags such as `NNG+JKS` are kept as well.
///
/// # Examples
///
/// ```
/// use noun_sieve::core::{TagFilter, Token};
///
/// let filter = TagFilter::default();
/// let tokens = vec![
///     Token::new("AI", "SL"),
///     Token::new("기술", "NNG"),
///     Token::new("이", "JKS"),
/// ];
/// assert_eq!(filter.apply(&tokens).data, vec!["AI", "기술"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilter {
    prefixes: Vec<String>,
    exact: Vec<String>,
}

impl Default for TagFilter {
    fn default() -> Self {
        Self::new(
            DEFAULT_PREFIX_TAGS.iter().copied(),
            DEFAULT_EXACT_TAGS.iter().copied(),
        )
    }
}

impl TagFilter {
    /// Creates a filter from explicit prefix and exact tag lists.
    pub fn new<P, E>(prefixes: P, exact: E) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
            exact: exact.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a filter that keeps nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            prefixes: Vec::new(),
            exact: Vec::new(),
        }
    }

    /// Adds a kept tag prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push(prefix.into());
        self
    }

    /// Adds a kept exact tag.
    #[must_use]
    pub fn with_exact(mut self, tag: impl Into<String>) -> Self {
        self.exact.push(tag.into());
        self
    }

    /// Configured prefixes.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Configured exact tags.
    pub fn exact(&self) -> &[String] {
        &self.exact
    }

    /// Returns whether a token with this tag survives.
    pub fn keeps(&self, tag: &str) -> bool {
        self.prefixes.iter().any(|p| tag.starts_with(p.as_str()))
            || self.exact.iter().any(|e| e == tag)
    }

    /// Collects the forms of surviving tokens, preserving order and duplicates.
    pub fn apply(&self, tokens: &[Token]) -> FilterResult {
        tokens
            .iter()
            .filter(|token| self.keeps(&token.tag))
            .map(|token| token.form.clone())
            .collect()
    }
}
