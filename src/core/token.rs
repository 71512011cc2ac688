//! Tagged token representation.

use serde::{Deserialize, Serialize};

/// A morphological unit produced by an analyzer.
///
/// `form` is the surface string as the analyzer reports it and `tag` is the
/// part-of-speech code from the analyzer's tagging scheme (for Korean
/// analyzers, the Sejong-style set: `NNG`, `NNP`, `SL`, `JKS`, `VV+EC`, ...).
///
/// # Examples
///
/// ```
/// use noun_sieve::core::Token;
///
/// let token = Token::new("학교", "NNG");
/// assert_eq!(token.form, "학교");
/// assert_eq!(token.tag, "NNG");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Surface form.
    pub form: String,
    /// Part-of-speech tag.
    pub tag: String,
}

impl Token {
    /// Creates a new token.
    pub fn new(form: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            tag: tag.into(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.form, self.tag)
    }
}
