//! Input utilities.
//!
//! Line-at-a-time reading of the sentence stream with an explicit
//! end-of-input sentinel, plus whole-file reading for lexicon and stopword
//! files.

use crate::error::{IoError, Result};
use crate::io::unicode::{strip_line_terminator, validate_utf8};
use std::io::BufRead;
use std::path::Path;

/// Reads one sentence per line from a buffered source.
///
/// # Examples
///
/// ```
/// use noun_sieve::io::LineReader;
///
/// let mut reader = LineReader::new("첫째\n둘째".as_bytes());
/// assert_eq!(reader.next_line().unwrap().as_deref(), Some("첫째"));
/// assert_eq!(reader.next_line().unwrap().as_deref(), Some("둘째"));
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    line_number: u64,
}

impl<R: BufRead> LineReader<R> {
    /// Wraps a buffered reader.
    pub const fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            line_number: 0,
        }
    }

    /// Number of lines read so far.
    pub const fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Reads the next line without its terminator.
    ///
    /// Returns `Ok(None)` once the stream is exhausted. A final line without
    /// a trailing newline is still returned.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the line is not valid UTF-8.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        let read = self
            .inner
            .read_until(b'\n', &mut self.buf)
            .map_err(|e| IoError::Generic(e.to_string()))?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let text = validate_utf8(&self.buf).map_err(|offset| IoError::InvalidUtf8 {
            line: self.line_number,
            offset,
        })?;
        Ok(Some(strip_line_terminator(text).to_string()))
    }
}

/// Reads a UTF-8 file to a string.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, or is not
/// valid UTF-8.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy().to_string();

    if !path.exists() {
        return Err(IoError::FileNotFound { path: path_str }.into());
    }

    let bytes = std::fs::read(path).map_err(|e| IoError::ReadFailed {
        path: path_str.clone(),
        reason: e.to_string(),
    })?;

    String::from_utf8(bytes).map_err(|e| {
        IoError::ReadFailed {
            path: path_str,
            reason: format!("invalid UTF-8 at byte offset {}", e.utf8_error().valid_up_to()),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    #[test]
    fn test_empty_stream() {
        let mut reader = LineReader::new(&b""[..]);
        assert_eq!(reader.next_line().unwrap(), None);
        assert_eq!(reader.line_number(), 0);
    }

    #[test]
    fn test_empty_line_is_not_end_of_input() {
        let mut reader = LineReader::new(&b"\n\n"[..]);
        assert_eq!(reader.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(reader.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(reader.next_line().unwrap(), None);
        assert_eq!(reader.line_number(), 2);
    }

    #[test]
    fn test_crlf_stripped() {
        let mut reader = LineReader::new("나는 학교에 간다\r\n".as_bytes());
        assert_eq!(
            reader.next_line().unwrap().as_deref(),
            Some("나는 학교에 간다")
        );
    }

    #[test]
    fn test_surrounding_spaces_kept() {
        let mut reader = LineReader::new(&b"  spaced  \n"[..]);
        assert_eq!(reader.next_line().unwrap().as_deref(), Some("  spaced  "));
    }

    #[test]
    fn test_invalid_utf8_reports_line() {
        let mut reader = LineReader::new(&b"ok\nab\xFFcd\n"[..]);
        assert!(reader.next_line().unwrap().is_some());
        let err = reader.next_line().unwrap_err();
        assert!(matches!(
            err,
            Error::Io(IoError::InvalidUtf8 { line: 2, offset: 2 })
        ));
    }

    #[test]
    fn test_read_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("lexicon.tsv");
        std::fs::write(&file_path, "학교\tNNG\n").unwrap();

        let content = read_file(&file_path).unwrap();
        assert_eq!(content, "학교\tNNG\n");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let err = read_file("/nonexistent/path/file.txt").unwrap_err();
        assert!(matches!(err, Error::Io(IoError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_invalid_utf8_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bad.txt");
        std::fs::write(&file_path, [0xFF, 0xFE]).unwrap();

        let err = read_file(&file_path).unwrap_err();
        assert!(err.to_string().contains("invalid UTF-8"));
    }
}
