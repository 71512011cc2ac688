//! Unicode utilities for sentence handling.
//!
//! Provides UTF-8 validation, line-terminator stripping, word-bound
//! segmentation, and coarse script classification used to tag text the
//! lexicon does not cover.

use unicode_segmentation::UnicodeSegmentation;

/// Coarse script class of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Hangul syllables and jamo.
    Hangul,
    /// Latin letters (and other alphabetic non-CJK scripts).
    Latin,
    /// Decimal digits.
    Digit,
    /// CJK ideographs (Hanja).
    Hanja,
    /// Sentence-final punctuation: `.`, `?`, `!`.
    Terminal,
    /// Any other symbol or punctuation.
    Symbol,
    /// Whitespace.
    Space,
}

impl CharClass {
    /// Classifies a character.
    #[must_use]
    pub fn of(c: char) -> Self {
        match c {
            '\u{AC00}'..='\u{D7A3}'
            | '\u{1100}'..='\u{11FF}'
            | '\u{3130}'..='\u{318F}'
            | '\u{A960}'..='\u{A97F}'
            | '\u{D7B0}'..='\u{D7FF}' => Self::Hangul,
            '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{F900}'..='\u{FAFF}' => {
                Self::Hanja
            }
            '.' | '?' | '!' | '。' | '？' | '！' => Self::Terminal,
            c if c.is_whitespace() => Self::Space,
            c if c.is_numeric() => Self::Digit,
            c if c.is_alphabetic() => Self::Latin,
            _ => Self::Symbol,
        }
    }

    /// Sejong-style tag assigned to an unrecognized run of this class.
    #[must_use]
    pub const fn fallback_tag(self) -> &'static str {
        match self {
            Self::Hangul => "UN",
            Self::Latin => "SL",
            Self::Digit => "SN",
            Self::Hanja => "SH",
            Self::Terminal => "SF",
            Self::Symbol | Self::Space => "SW",
        }
    }
}

/// Validates that a byte slice is valid UTF-8.
///
/// # Errors
///
/// Returns the byte offset of the first invalid UTF-8 sequence.
pub fn validate_utf8(bytes: &[u8]) -> std::result::Result<&str, usize> {
    std::str::from_utf8(bytes).map_err(|e| e.valid_up_to())
}

/// Removes one trailing `\n` or `\r\n`.
///
/// # Examples
///
/// ```
/// use noun_sieve::io::strip_line_terminator;
///
/// assert_eq!(strip_line_terminator("학교\r\n"), "학교");
/// assert_eq!(strip_line_terminator(" 학교 \n"), " 학교 ");
/// ```
#[must_use]
pub fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Splits text at Unicode word boundaries, dropping whitespace segments.
///
/// Punctuation becomes its own segment; runs of Hangul, Latin letters and
/// digits stay together.
pub fn word_segments(s: &str) -> impl Iterator<Item = &str> {
    s.split_word_bounds()
        .filter(|segment| !segment.chars().all(char::is_whitespace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case('학', CharClass::Hangul)]
    #[test_case('ㄱ', CharClass::Hangul)]
    #[test_case('A', CharClass::Latin)]
    #[test_case('é', CharClass::Latin)]
    #[test_case('7', CharClass::Digit)]
    #[test_case('學', CharClass::Hanja)]
    #[test_case('.', CharClass::Terminal)]
    #[test_case('?', CharClass::Terminal)]
    #[test_case(',', CharClass::Symbol)]
    #[test_case('"', CharClass::Symbol)]
    #[test_case(' ', CharClass::Space)]
    fn test_char_class(c: char, expected: CharClass) {
        assert_eq!(CharClass::of(c), expected);
    }

    #[test]
    fn test_fallback_tags() {
        assert_eq!(CharClass::Latin.fallback_tag(), "SL");
        assert_eq!(CharClass::Digit.fallback_tag(), "SN");
        assert_eq!(CharClass::Hanja.fallback_tag(), "SH");
        assert_eq!(CharClass::Terminal.fallback_tag(), "SF");
        assert_eq!(CharClass::Hangul.fallback_tag(), "UN");
    }

    #[test]
    fn test_validate_utf8() {
        assert!(validate_utf8("학교".as_bytes()).is_ok());
        assert_eq!(validate_utf8(&[b'a', 0xFF, 0xFE]), Err(1));
    }

    #[test]
    fn test_strip_line_terminator() {
        assert_eq!(strip_line_terminator(""), "");
        assert_eq!(strip_line_terminator("\n"), "");
        assert_eq!(strip_line_terminator("a\r\n"), "a");
        assert_eq!(strip_line_terminator("a\n\n"), "a\n");
        assert_eq!(strip_line_terminator("no newline"), "no newline");
    }

    #[test]
    fn test_word_segments() {
        let segments: Vec<&str> = word_segments("AI 기술이 발전한다.").collect();
        assert_eq!(segments, vec!["AI", "기술이", "발전한다", "."]);
    }

    #[test]
    fn test_word_segments_empty() {
        assert_eq!(word_segments("   ").count(), 0);
    }
}
