//! # noun-sieve
//!
//! Line-oriented Korean noun extraction.
//!
//! noun-sieve reads one sentence per line, tokenizes it with a morphological
//! analyzer, keeps the general nouns (`NNG*`) and foreign-script tokens
//! (`SL`), and writes `{"data": [...]}` for every input line.
//!
//! ## Features
//!
//! - **Analyzer backends**: a long-lived MeCab-compatible process, or an
//!   offline lexicon segmenter
//! - **Stopwords**: built-in `(form, tag)` list, extendable from a file
//! - **Tag policy**: prefix and exact tag matching, extendable from the CLI
//! - **Streaming**: one flushed output line per input line

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analyzer;
pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod pipeline;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use crate::core::{FilterResult, TagFilter, Token};

// Re-export analyzer types
pub use analyzer::{
    AnalyzerConfig, AnalyzerKind, Lexicon, LexiconTokenizer, MecabTokenizer, StopwordSet,
    Tokenizer, available_backends, create_tokenizer,
};

// Re-export pipeline types
pub use pipeline::{FilterLoop, RunSummary, Termination};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
