//! Single-line JSON encoding.
//!
//! The default style matches the output consumers already parse:
//! `{"data": ["학교"]}` with `": "` after keys and `", "` between elements.
//! Optionally every non-ASCII code point is written as a `\uXXXX` escape.

use crate::error::Result;
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

/// Separator style of an encoded line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineStyle {
    /// `{"data": ["a", "b"]}`
    #[default]
    Spaced,
    /// `{"data":["a","b"]}`
    Compact,
}

/// Encodes values as one JSON line (no trailing newline).
///
/// # Examples
///
/// ```
/// use noun_sieve::core::FilterResult;
/// use noun_sieve::io::{JsonLineEncoder, LineStyle};
///
/// let result: FilterResult = vec!["AI".to_string(), "기술".to_string()].into_iter().collect();
///
/// let spaced = JsonLineEncoder::new(LineStyle::Spaced, false);
/// assert_eq!(spaced.encode(&result).unwrap(), r#"{"data": ["AI", "기술"]}"#);
///
/// let ascii = JsonLineEncoder::new(LineStyle::Compact, true);
/// assert_eq!(ascii.encode(&result).unwrap(), r#"{"data":["AI","\uae30\uc220"]}"#);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonLineEncoder {
    style: LineStyle,
    ensure_ascii: bool,
}

impl JsonLineEncoder {
    /// Creates an encoder.
    #[must_use]
    pub const fn new(style: LineStyle, ensure_ascii: bool) -> Self {
        Self {
            style,
            ensure_ascii,
        }
    }

    /// Configured style.
    #[must_use]
    pub const fn style(&self) -> LineStyle {
        self.style
    }

    /// Whether non-ASCII characters are escaped.
    #[must_use]
    pub const fn ensure_ascii(&self) -> bool {
        self.ensure_ascii
    }

    /// Serializes `value` to a single line.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be serialized.
    pub fn encode<T: Serialize>(&self, value: &T) -> Result<String> {
        let mut buf = Vec::with_capacity(64);
        let formatter = LineFormatter {
            style: self.style,
            ensure_ascii: self.ensure_ascii,
        };
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut serializer)?;
        // The formatter only ever writes valid UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

struct LineFormatter {
    style: LineStyle,
    ensure_ascii: bool,
}

impl LineFormatter {
    fn separator<W: ?Sized + io::Write>(&self, writer: &mut W) -> io::Result<()> {
        match self.style {
            LineStyle::Spaced => writer.write_all(b", "),
            LineStyle::Compact => writer.write_all(b","),
        }
    }
}

impl Formatter for LineFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first { Ok(()) } else { self.separator(writer) }
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first { Ok(()) } else { self.separator(writer) }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        match self.style {
            LineStyle::Spaced => writer.write_all(b": "),
            LineStyle::Compact => writer.write_all(b":"),
        }
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        if !self.ensure_ascii || fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                let mut byte = [0u8; 1];
                writer.write_all(c.encode_utf8(&mut byte).as_bytes())?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}
