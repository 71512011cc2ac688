//! Error types for noun-sieve operations.
//!
//! This module provides the error hierarchy using `thiserror` for analyzer
//! backends, line I/O, configuration, and CLI commands.

use thiserror::Error;

/// Result type alias for noun-sieve operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Morphological analyzer errors.
    #[error("analyzer error: {0}")]
    Analyzer(#[from] AnalyzerError),

    /// I/O errors (input stream, output stream, files).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// JSON serialization errors.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors raised while starting or talking to an analyzer backend.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The analyzer process could not be started.
    #[error("failed to spawn analyzer `{program}`: {reason}")]
    Spawn {
        /// Program that was executed.
        program: String,
        /// Reason for failure.
        reason: String,
    },

    /// The analyzer process closed its output before finishing a sentence.
    #[error("analyzer process exited unexpectedly")]
    ProcessExited,

    /// The analyzer produced output that could not be parsed.
    #[error("malformed analyzer output: {line:?}")]
    Protocol {
        /// The offending output line.
        line: String,
    },

    /// Requested backend name is not known.
    #[error("unknown analyzer backend: {name}")]
    UnknownBackend {
        /// Name of the unknown backend.
        name: String,
    },

    /// Sentence exceeds the analyzer's input buffer.
    #[error("sentence of {len} bytes exceeds the analyzer input limit of {limit} bytes")]
    SentenceTooLong {
        /// Sentence length in bytes.
        len: usize,
        /// Largest accepted sentence in bytes.
        limit: usize,
    },

    /// Lexicon file problems.
    #[error("invalid lexicon entry at line {line}: {reason}")]
    Lexicon {
        /// 1-based line number.
        line: usize,
        /// Reason the entry was rejected.
        reason: String,
    },
}

/// I/O-specific errors.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Input line was not valid UTF-8.
    #[error("invalid UTF-8 on input line {line} at byte offset {offset}")]
    InvalidUtf8 {
        /// 1-based input line number.
        line: u64,
        /// Byte offset of the first invalid byte within the line.
        offset: usize,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Missing required argument.
    #[error("missing required argument: {0}")]
    MissingArgument(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
