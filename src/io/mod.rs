//! I/O utilities for noun-sieve.
//!
//! Line reading for the sentence stream, JSON line encoding for results,
//! file reading for lexicon and stopword files, and Unicode helpers.

pub mod json;
pub mod reader;
pub mod unicode;

pub use json::{JsonLineEncoder, LineStyle};
pub use reader::{LineReader, read_file};
pub use unicode::{CharClass, strip_line_terminator, validate_utf8, word_segments};
