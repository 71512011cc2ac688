//! MeCab process backend.
//!
//! Keeps one analyzer process alive for the whole run and exchanges one
//! sentence per request over its stdin/stdout. MeCab's default output format
//! is one morpheme per line, `surface<TAB>feature,feature,...`, followed by a
//! line containing only `EOS`. With mecab-ko-dic the first feature is the
//! part-of-speech tag.

use crate::analyzer::{StopwordSet, Tokenizer};
use crate::core::Token;
use crate::error::{AnalyzerError, Error, IoError, Result};
use log::{debug, info};
use std::io::{self, BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::sync::Mutex;

/// End-of-sentence marker line.
const EOS: &str = "EOS";

/// Largest `--input-buffer-size` MeCab accepts.
pub const MAX_INPUT_BUFFER_SIZE: usize = 8192 * 640;

struct Session {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

/// Tokenizer backed by an external MeCab-compatible process.
pub struct MecabTokenizer {
    program: String,
    max_sentence_bytes: usize,
    session: Mutex<Session>,
}

impl MecabTokenizer {
    /// Starts the analyzer process.
    ///
    /// `args` should include `-b` with [`MAX_INPUT_BUFFER_SIZE`]: MeCab splits
    /// lines that do not fit its input buffer and answers each piece with its
    /// own `EOS`. Sentences longer than the buffer are rejected before they
    /// are sent.
    ///
    /// # Arguments
    ///
    /// * `program` - Executable to run (looked up on `PATH`).
    /// * `args` - Arguments, e.g. `["-d", "/path/to/mecab-ko-dic"]`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Spawn`] if the process cannot be started.
    pub fn spawn(program: &str, args: &[String]) -> Result<Self> {
        let spawn_error = |reason: String| AnalyzerError::Spawn {
            program: program.to_string(),
            reason,
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| spawn_error(e.to_string()))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| spawn_error("stdin was not captured".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| spawn_error("stdout was not captured".to_string()))?;

        info!("started analyzer `{program}` (pid {})", child.id());

        Ok(Self {
            program: program.to_string(),
            max_sentence_bytes: MAX_INPUT_BUFFER_SIZE - 1,
            session: Mutex::new(Session {
                child,
                stdin,
                stdout: BufReader::new(stdout),
            }),
        })
    }

    /// Sets the largest sentence, in bytes, sent to the process.
    ///
    /// Must be below the process's input buffer size (MeCab keeps one byte
    /// of the buffer for the terminator).
    #[must_use]
    pub fn with_max_sentence_bytes(mut self, limit: usize) -> Self {
        self.max_sentence_bytes = limit;
        self
    }

    /// Returns the analyzer program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Largest sentence, in bytes, sent to the process.
    pub const fn max_sentence_bytes(&self) -> usize {
        self.max_sentence_bytes
    }

    fn analyze(&self, sentence: &str) -> Result<Vec<Token>> {
        // One request line per sentence keeps responses aligned.
        let request = sentence.replace(['\n', '\r'], " ");
        if request.len() > self.max_sentence_bytes {
            return Err(AnalyzerError::SentenceTooLong {
                len: request.len(),
                limit: self.max_sentence_bytes,
            }
            .into());
        }

        let mut guard = self
            .session
            .lock()
            .map_err(|_| AnalyzerError::ProcessExited)?;
        let session = &mut *guard;

        writeln!(session.stdin, "{request}").map_err(pipe_error)?;
        session.stdin.flush().map_err(pipe_error)?;

        let mut tokens = Vec::new();
        let mut line = String::new();
        loop {
            line.clear();
            let read = session.stdout.read_line(&mut line).map_err(pipe_error)?;
            if read == 0 {
                return Err(AnalyzerError::ProcessExited.into());
            }
            let entry = line.trim_end_matches(['\n', '\r']);
            if entry == EOS {
                break;
            }
            if entry.is_empty() {
                continue;
            }
            tokens.push(parse_mecab_line(entry)?);
        }
        Ok(tokens)
    }
}

impl Tokenizer for MecabTokenizer {
    fn tokenize(&self, sentence: &str, stopwords: &StopwordSet) -> Result<Vec<Token>> {
        let mut tokens = self.analyze(sentence)?;
        let total = tokens.len();
        tokens.retain(|t| !stopwords.contains(&t.form, &t.tag));
        debug!("mecab: {total} morphemes, {} after stopwords", tokens.len());
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "mecab"
    }
}

impl Drop for MecabTokenizer {
    fn drop(&mut self) {
        if let Ok(session) = self.session.get_mut() {
            let _ = session.child.kill();
            let _ = session.child.wait();
        }
    }
}

fn pipe_error(err: io::Error) -> Error {
    match err.kind() {
        io::ErrorKind::BrokenPipe | io::ErrorKind::UnexpectedEof => {
            AnalyzerError::ProcessExited.into()
        }
        _ => IoError::Generic(err.to_string()).into(),
    }
}

/// Parses one morpheme line of MeCab output.
///
/// # Examples
///
/// ```
/// use noun_sieve::analyzer::parse_mecab_line;
///
/// let token = parse_mecab_line("학교\tNNG,*,F,학교,*,*,*,*").unwrap();
/// assert_eq!(token.form, "학교");
/// assert_eq!(token.tag, "NNG");
/// ```
///
/// # Errors
///
/// Returns [`AnalyzerError::Protocol`] if the line has no tab separator or an
/// empty surface or tag.
pub fn parse_mecab_line(line: &str) -> Result<Token> {
    let protocol_error = || AnalyzerError::Protocol {
        line: line.to_string(),
    };
    let (surface, features) = line.split_once('\t').ok_or_else(protocol_error)?;
    let tag = features.split(',').next().unwrap_or_default();
    if surface.is_empty() || tag.is_empty() {
        return Err(protocol_error().into());
    }
    Ok(Token::new(surface, tag))
}
