//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::analyzer::{AnalyzerConfig, AnalyzerKind, DEFAULT_MECAB_PROGRAM};
use crate::core::TagFilter;
use crate::error::Result;
use crate::io::{JsonLineEncoder, LineStyle};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// noun-sieve: keep the nouns, drop the rest.
///
/// Reads one sentence per line from stdin, tokenizes it with a Korean
/// morphological analyzer, and writes `{"data": [...]}` with the general
/// nouns (NNG*) and foreign-script tokens (SL) of each line.
#[derive(Parser, Debug)]
#[command(name = "noun-sieve")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Analyzer backend (mecab, lexicon).
    #[arg(long, default_value = "mecab", env = "NOUN_SIEVE_ANALYZER", global = true)]
    pub analyzer: String,

    /// MeCab-compatible executable for the mecab backend.
    #[arg(long, default_value = DEFAULT_MECAB_PROGRAM, env = "NOUN_SIEVE_MECAB", global = true)]
    pub mecab_program: String,

    /// Dictionary directory passed to the analyzer as `-d`.
    #[arg(long, env = "NOUN_SIEVE_DICDIR", global = true)]
    pub dicdir: Option<PathBuf>,

    /// Extra argument for the analyzer process (repeatable).
    #[arg(
        long = "mecab-arg",
        value_name = "ARG",
        allow_hyphen_values = true,
        global = true
    )]
    pub mecab_args: Vec<String>,

    /// Lexicon file (`surface<TAB>tag`) for the lexicon backend.
    #[arg(long, env = "NOUN_SIEVE_LEXICON", global = true)]
    pub lexicon: Option<PathBuf>,

    /// Additional stopword file (`form/TAG` or `form` per line).
    #[arg(long, env = "NOUN_SIEVE_STOPWORDS", global = true)]
    pub stopwords: Option<PathBuf>,

    /// Start from an empty stopword set instead of the built-in list.
    #[arg(long, global = true)]
    pub no_default_stopwords: bool,

    /// Also keep tags starting with this prefix (repeatable).
    #[arg(long = "prefix-tag", value_name = "TAG", global = true)]
    pub prefix_tags: Vec<String>,

    /// Also keep this exact tag (repeatable).
    #[arg(long = "exact-tag", value_name = "TAG", global = true)]
    pub exact_tags: Vec<String>,

    /// Drop the built-in NNG/SL policy; keep only --prefix-tag/--exact-tag.
    #[arg(long, global = true)]
    pub no_default_tags: bool,

    /// Emit `{"data":[...]}` without spaces.
    #[arg(long, global = true)]
    pub compact: bool,

    /// Escape non-ASCII characters as `\uXXXX`.
    #[arg(long, global = true)]
    pub ensure_ascii: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format for inspection commands and errors (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute (defaults to `filter`).
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Filter stdin line by line (the default).
    Filter,

    /// Show every token of one sentence with its tag.
    Tokenize {
        /// Sentence to analyze.
        sentence: String,
    },

    /// List the effective stopword set.
    Stopwords,
}

impl Cli {
    /// Returns the command to run, defaulting to `filter`.
    #[must_use]
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Filter)
    }

    /// Builds the analyzer configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown backend name.
    pub fn analyzer_config(&self) -> Result<AnalyzerConfig> {
        Ok(AnalyzerConfig {
            kind: AnalyzerKind::parse(&self.analyzer)?,
            program: self.mecab_program.clone(),
            dicdir: self.dicdir.clone(),
            extra_args: self.mecab_args.clone(),
            lexicon: self.lexicon.clone(),
        })
    }

    /// Builds the tag filter from the built-in policy and extra tags.
    #[must_use]
    pub fn tag_filter(&self) -> TagFilter {
        let base = if self.no_default_tags {
            TagFilter::empty()
        } else {
            TagFilter::default()
        };
        let with_prefixes = self
            .prefix_tags
            .iter()
            .fold(base, |filter, tag| filter.with_prefix(tag.as_str()));
        self.exact_tags
            .iter()
            .fold(with_prefixes, |filter, tag| filter.with_exact(tag.as_str()))
    }

    /// Builds the result line encoder.
    #[must_use]
    pub const fn line_encoder(&self) -> JsonLineEncoder {
        let style = if self.compact {
            LineStyle::Compact
        } else {
            LineStyle::Spaced
        };
        JsonLineEncoder::new(style, self.ensure_ascii)
    }

    /// Log filter used when `RUST_LOG` is not set.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
