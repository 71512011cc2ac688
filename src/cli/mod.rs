//! CLI layer for noun-sieve.
//!
//! Provides the command-line interface using clap: the default `filter`
//! loop over stdin and the `tokenize` and `stopwords` inspection commands.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::{execute, filter_stdio, init_logging, run_filter};
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
