//! Lexicon-based fallback tokenizer.
//!
//! Provides deterministic segmentation when no morphological analyzer is
//! installed. Each whitespace/punctuation-delimited word is split by greedy
//! longest match against a `surface<TAB>tag` lexicon; characters the lexicon
//! does not cover are grouped into same-script runs and tagged by script
//! (`SL` for Latin, `SN` for digits, `SH` for Hanja, `SF`/`SW` for
//! punctuation, `UN` for unknown Hangul).
//!
//! This is NOT morphological analysis - there is no disambiguation and no
//! handling of conjugation. Use the `mecab` backend for real text.

use crate::analyzer::{StopwordSet, Tokenizer};
use crate::core::Token;
use crate::error::{AnalyzerError, Result};
use crate::io::read_file;
use crate::io::unicode::{CharClass, word_segments};
use log::debug;
use std::collections::HashMap;
use std::path::Path;

/// Surface-to-tag dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: HashMap<String, String>,
    /// Longest surface length in characters, bounding prefix probes.
    max_chars: usize,
}

impl Lexicon {
    /// Creates a lexicon from `(surface, tag)` pairs. Later duplicates win.
    #[must_use]
    pub fn from_entries(entries: &[(&str, &str)]) -> Self {
        let mut lexicon = Self::default();
        for (surface, tag) in entries {
            lexicon.insert(*surface, *tag);
        }
        lexicon
    }

    /// Parses a lexicon file body.
    ///
    /// One entry per line, `surface<TAB>tag`; further tab-separated columns
    /// are ignored. Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Lexicon`] naming the first malformed line.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lexicon = Self::default();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let invalid = |reason: &str| AnalyzerError::Lexicon {
                line: index + 1,
                reason: reason.to_string(),
            };
            let (surface, rest) = line
                .split_once('\t')
                .ok_or_else(|| invalid("expected `surface<TAB>tag`"))?;
            let tag = rest.split('\t').next().unwrap_or_default().trim();
            if surface.is_empty() {
                return Err(invalid("empty surface").into());
            }
            if tag.is_empty() {
                return Err(invalid("empty tag").into());
            }
            lexicon.insert(surface, tag);
        }
        Ok(lexicon)
    }

    /// Loads a lexicon file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains a malformed
    /// entry.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let lexicon = Self::parse(&read_file(path.as_ref())?)?;
        debug!(
            "loaded {} lexicon entries from {}",
            lexicon.len(),
            path.as_ref().display()
        );
        Ok(lexicon)
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, surface: impl Into<String>, tag: impl Into<String>) {
        let surface = surface.into();
        self.max_chars = self.max_chars.max(surface.chars().count());
        self.entries.insert(surface, tag.into());
    }

    /// Looks up the tag of an exact surface.
    pub fn get(&self, surface: &str) -> Option<&str> {
        self.entries.get(surface).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the longest entry that is a prefix of `s`.
    ///
    /// Returns the matched byte length and its tag.
    fn longest_prefix(&self, s: &str) -> Option<(usize, &str)> {
        let ends = s
            .char_indices()
            .skip(1)
            .map(|(i, _)| i)
            .chain(std::iter::once(s.len()));

        let mut best = None;
        for end in ends.take(self.max_chars) {
            if let Some(tag) = self.get(&s[..end]) {
                best = Some((end, tag));
            }
        }
        best
    }
}

/// Tokenizer backed by a [`Lexicon`].
///
/// # Examples
///
/// ```
/// use noun_sieve::analyzer::{Lexicon, LexiconTokenizer, StopwordSet, Tokenizer};
///
/// let lexicon = Lexicon::from_entries(&[("기술", "NNG"), ("이", "JKS")]);
/// let tokenizer = LexiconTokenizer::new(lexicon);
/// let tokens = tokenizer.tokenize("AI 기술이", &StopwordSet::empty()).unwrap();
/// let tags: Vec<&str> = tokens.iter().map(|t| t.tag.as_str()).collect();
/// assert_eq!(tags, vec!["SL", "NNG", "JKS"]);
/// ```
#[derive(Debug, Clone)]
pub struct LexiconTokenizer {
    lexicon: Lexicon,
}

impl LexiconTokenizer {
    /// Creates a tokenizer over `lexicon`.
    #[must_use]
    pub const fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// The underlying lexicon.
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Segments a sentence without stopword removal.
    pub fn segment(&self, sentence: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        for word in word_segments(sentence) {
            let mut rest = word;
            while let Some(first) = rest.chars().next() {
                if let Some((len, tag)) = self.lexicon.longest_prefix(rest) {
                    tokens.push(Token::new(&rest[..len], tag));
                    rest = &rest[len..];
                    continue;
                }

                let class = CharClass::of(first);
                let mut end = first.len_utf8();
                for (i, c) in rest.char_indices().skip(1) {
                    if CharClass::of(c) != class
                        || self.lexicon.longest_prefix(&rest[i..]).is_some()
                    {
                        break;
                    }
                    end = i + c.len_utf8();
                }
                tokens.push(Token::new(&rest[..end], class.fallback_tag()));
                rest = &rest[end..];
            }
        }
        tokens
    }
}

impl Tokenizer for LexiconTokenizer {
    fn tokenize(&self, sentence: &str, stopwords: &StopwordSet) -> Result<Vec<Token>> {
        let mut tokens = self.segment(sentence);
        tokens.retain(|t| !stopwords.contains(&t.form, &t.tag));
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}
