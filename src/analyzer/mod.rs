//! Morphological analyzer backends.
//!
//! The filter loop only sees the [`Tokenizer`] trait. Two backends are
//! provided:
//!
//! - `mecab`: drives a long-lived MeCab-compatible process (for example
//!   `mecab -d /usr/local/lib/mecab/dic/mecab-ko-dic`) over pipes
//! - `lexicon`: offline longest-match segmentation against a `surface\ttag`
//!   lexicon file, with script-based tags for unknown runs (deterministic
//!   but not a real analyzer)

mod lexicon;
mod mecab;
pub mod stopwords;

pub use lexicon::{Lexicon, LexiconTokenizer};
pub use mecab::{MAX_INPUT_BUFFER_SIZE, MecabTokenizer, parse_mecab_line};
pub use stopwords::StopwordSet;

use crate::core::Token;
use crate::error::{AnalyzerError, CommandError, Result};
use std::path::PathBuf;

/// Default analyzer program for the `mecab` backend.
pub const DEFAULT_MECAB_PROGRAM: &str = "mecab";

/// Trait for sentence tokenizers.
///
/// Implementations are built once and shared by reference for the whole
/// run, so methods take `&self`. Implementations that hold mutable resources
/// (child processes) guard them internally.
pub trait Tokenizer: Send + Sync {
    /// Splits `sentence` into tagged tokens in left-to-right order.
    ///
    /// Tokens matching `stopwords` must not appear in the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the analyzer fails. Callers treat this as fatal.
    fn tokenize(&self, sentence: &str, stopwords: &StopwordSet) -> Result<Vec<Token>>;

    /// Returns the backend name.
    fn name(&self) -> &'static str;
}

/// Available analyzer backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerKind {
    /// External MeCab-compatible process.
    Mecab,
    /// Offline lexicon lookup.
    Lexicon,
}

impl AnalyzerKind {
    /// Parses a backend name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::UnknownBackend`] for unrecognized names.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "mecab" => Ok(Self::Mecab),
            "lexicon" => Ok(Self::Lexicon),
            _ => Err(AnalyzerError::UnknownBackend {
                name: name.to_string(),
            }
            .into()),
        }
    }

    /// Backend name as accepted by [`AnalyzerKind::parse`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mecab => "mecab",
            Self::Lexicon => "lexicon",
        }
    }
}

/// Lists available backend names.
#[must_use]
pub fn available_backends() -> Vec<&'static str> {
    vec!["mecab", "lexicon"]
}

/// Settings needed to construct a tokenizer.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Which backend to build.
    pub kind: AnalyzerKind,
    /// Program to execute for the `mecab` backend.
    pub program: String,
    /// Dictionary directory passed as `-d` to the `mecab` backend.
    pub dicdir: Option<PathBuf>,
    /// Extra arguments for the `mecab` backend.
    pub extra_args: Vec<String>,
    /// Lexicon file for the `lexicon` backend.
    pub lexicon: Option<PathBuf>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            kind: AnalyzerKind::Mecab,
            program: DEFAULT_MECAB_PROGRAM.to_string(),
            dicdir: None,
            extra_args: Vec::new(),
            lexicon: None,
        }
    }
}

impl AnalyzerConfig {
    /// Arguments passed to the analyzer process.
    ///
    /// The input buffer is always raised to [`MAX_INPUT_BUFFER_SIZE`] so a
    /// sentence is never split into several responses.
    #[must_use]
    pub fn process_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.extra_args.len() + 4);
        args.push("-b".to_string());
        args.push(MAX_INPUT_BUFFER_SIZE.to_string());
        if let Some(dicdir) = &self.dicdir {
            args.push("-d".to_string());
            args.push(dicdir.to_string_lossy().into_owned());
        }
        args.extend(self.extra_args.iter().cloned());
        args
    }
}

/// Creates the configured tokenizer.
///
/// # Errors
///
/// Returns an error if the analyzer process cannot be spawned, the lexicon
/// cannot be loaded, or the `lexicon` backend is selected without a lexicon
/// file.
pub fn create_tokenizer(config: &AnalyzerConfig) -> Result<Box<dyn Tokenizer>> {
    match config.kind {
        AnalyzerKind::Mecab => {
            let args = config.process_args();
            Ok(Box::new(MecabTokenizer::spawn(&config.program, &args)?))
        }
        AnalyzerKind::Lexicon => {
            let path = config
                .lexicon
                .as_ref()
                .ok_or_else(|| CommandError::MissingArgument("--lexicon".to_string()))?;
            Ok(Box::new(LexiconTokenizer::new(Lexicon::load(path)?)))
        }
    }
}
