//! The read, tokenize, filter, emit loop.
//!
//! [`FilterLoop`] borrows its collaborators (tokenizer, stopwords, tag
//! filter) for the duration of a run and keeps no state between lines, so the
//! output for a line depends only on that line's text.

use crate::analyzer::{StopwordSet, Tokenizer};
use crate::core::{FilterResult, TagFilter};
use crate::error::Result;
use crate::io::{JsonLineEncoder, LineReader};
use log::{debug, info};
use std::io::{self, BufRead, Write};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The input stream was exhausted.
    EndOfInput,
    /// The output stream was closed by the reader (broken pipe).
    OutputClosed,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Why the loop stopped.
    pub termination: Termination,
    /// Input lines read.
    pub lines: u64,
    /// Total forms emitted across all lines.
    pub kept: usize,
}

/// Line filter driving a [`Tokenizer`].
///
/// # Examples
///
/// ```
/// use noun_sieve::analyzer::{Lexicon, LexiconTokenizer, StopwordSet};
/// use noun_sieve::core::TagFilter;
/// use noun_sieve::io::JsonLineEncoder;
/// use noun_sieve::pipeline::{FilterLoop, Termination};
///
/// let tokenizer = LexiconTokenizer::new(Lexicon::from_entries(&[("학교", "NNG"), ("에", "JKB")]));
/// let stopwords = StopwordSet::empty();
/// let filter = TagFilter::default();
/// let filter_loop = FilterLoop::new(&tokenizer, &stopwords, &filter, JsonLineEncoder::default());
///
/// let mut out = Vec::new();
/// let summary = filter_loop.run("학교에\n".as_bytes(), &mut out).unwrap();
/// assert_eq!(summary.termination, Termination::EndOfInput);
/// assert_eq!(String::from_utf8(out).unwrap(), "{\"data\": [\"학교\"]}\n");
/// ```
pub struct FilterLoop<'a> {
    tokenizer: &'a dyn Tokenizer,
    stopwords: &'a StopwordSet,
    filter: &'a TagFilter,
    encoder: JsonLineEncoder,
}

impl<'a> FilterLoop<'a> {
    /// Creates a loop over already-initialized collaborators.
    pub fn new(
        tokenizer: &'a dyn Tokenizer,
        stopwords: &'a StopwordSet,
        filter: &'a TagFilter,
        encoder: JsonLineEncoder,
    ) -> Self {
        Self {
            tokenizer,
            stopwords,
            filter,
            encoder,
        }
    }

    /// Tokenizes and filters a single line.
    ///
    /// # Errors
    ///
    /// Returns the tokenizer's error unchanged.
    pub fn process_line(&self, line: &str) -> Result<FilterResult> {
        let tokens = self.tokenizer.tokenize(line, self.stopwords)?;
        let result = self.filter.apply(&tokens);
        debug!("{} tokens, {} kept", tokens.len(), result.len());
        Ok(result)
    }

    /// Tokenizes, filters, and encodes a single line (without newline).
    ///
    /// # Errors
    ///
    /// Returns an error if tokenizing or encoding fails.
    pub fn render_line(&self, line: &str) -> Result<String> {
        self.encoder.encode(&self.process_line(line)?)
    }

    /// Processes `input` until it is exhausted.
    ///
    /// Every input line produces exactly one output line, flushed before the
    /// next line is read. A closed output pipe stops the run without error.
    ///
    /// # Errors
    ///
    /// Returns the first input, tokenizer, encoding, or (non-broken-pipe)
    /// output error.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<RunSummary> {
        let mut reader = LineReader::new(input);
        let mut kept = 0;

        while let Some(line) = reader.next_line()? {
            let result = self.process_line(&line)?;
            kept += result.len();
            let encoded = self.encoder.encode(&result)?;

            if let Err(e) = write_line(&mut output, &encoded) {
                if e.kind() == io::ErrorKind::BrokenPipe {
                    info!("output closed after {} lines", reader.line_number());
                    return Ok(RunSummary {
                        termination: Termination::OutputClosed,
                        lines: reader.line_number(),
                        kept,
                    });
                }
                return Err(e.into());
            }
        }

        info!(
            "end of input after {} lines ({kept} forms kept, {} backend)",
            reader.line_number(),
            self.tokenizer.name()
        );
        Ok(RunSummary {
            termination: Termination::EndOfInput,
            lines: reader.line_number(),
            kept,
        })
    }
}

fn write_line<W: Write>(output: &mut W, line: &str) -> io::Result<()> {
    output.write_all(line.as_bytes())?;
    output.write_all(b"\n")?;
    output.flush()
}
