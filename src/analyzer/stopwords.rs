//! Stopword filtering.
//!
//! Stopwords are `(form, tag)` pairs: `이/VCP` is a stopword while `이/NNG`
//! is not. Entries listed without a tag match the form under any tag.

use crate::error::Result;
use crate::io::read_file;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;

/// Built-in Korean stopwords: high-frequency function morphemes and light
/// content words that carry little meaning on their own.
const DEFAULT_STOPWORDS: &[(&str, &str)] = &[
    ("이", "VCP"),
    ("하", "VV"),
    ("있", "VA"),
    ("되", "VV"),
    ("것", "NNB"),
    ("들", "XSN"),
    ("그", "MM"),
    ("수", "NNB"),
    ("이", "NP"),
    ("보", "VX"),
    ("않", "VX"),
    ("없", "VA"),
    ("나", "NP"),
    ("주", "VX"),
    ("아니", "VCN"),
    ("등", "NNB"),
    ("같", "VA"),
    ("때", "NNG"),
    ("년", "NNB"),
    ("가", "VV"),
    ("한", "MM"),
    ("지", "VX"),
    ("오", "VV"),
    ("말", "NNG"),
    ("일", "NNG"),
    ("그렇", "VA"),
    ("위하", "VV"),
    ("때문", "NNB"),
    ("그것", "NP"),
    ("두", "VV"),
    ("말하", "VV"),
    ("알", "VV"),
    ("그러나", "MAJ"),
    ("받", "VV"),
    ("못하", "VX"),
    ("일", "NNB"),
    ("그런", "MM"),
    ("또", "MAG"),
    ("더", "MAG"),
    ("많", "VA"),
    ("그리고", "MAJ"),
    ("좋", "VA"),
    ("크", "VA"),
    ("시키", "XSV"),
    ("그러", "VV"),
    ("하나", "NR"),
    ("살", "VV"),
    ("데", "NNB"),
    ("안", "MAG"),
    ("어떤", "MM"),
    ("번", "NNB"),
    ("나", "VX"),
    ("다른", "MM"),
    ("어떻", "VA"),
    ("들", "VV"),
    ("이렇", "VA"),
    ("점", "NNB"),
    ("싶", "VX"),
    ("말", "NNB"),
    ("좀", "MAG"),
    ("원", "NNB"),
    ("잘", "MAG"),
    ("놓", "VX"),
];

/// Immutable-after-construction set of stopwords handed to every tokenizer
/// call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    /// Form to the tags under which it is a stopword.
    tagged: HashMap<String, HashSet<String>>,
    /// Forms that are stopwords under any tag.
    forms: HashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_STOPWORDS)
    }
}

impl StopwordSet {
    /// Creates an empty set (no filtering).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tagged: HashMap::new(),
            forms: HashSet::new(),
        }
    }

    /// Creates a set from `(form, tag)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut set = Self::empty();
        for (form, tag) in pairs {
            set.insert(*form, *tag);
        }
        set
    }

    /// Parses stopwords from text.
    ///
    /// One entry per line: `form/TAG` (split on the last `/`) or a bare
    /// `form`. Blank lines and lines starting with `#` are ignored.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut set = Self::empty();
        set.extend_from_str(text);
        set
    }

    /// Loads stopwords from a file in the [`StopwordSet::parse`] format.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut set = Self::empty();
        set.extend_from_file(path)?;
        Ok(set)
    }

    /// Adds the entries of a stopword file to this set.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn extend_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let text = read_file(path)?;
        Ok(self.extend_from_str(&text))
    }

    fn extend_from_str(&mut self, text: &str) -> usize {
        let mut added = 0;
        for line in text.lines() {
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            match entry.rsplit_once('/') {
                Some((form, tag)) if !form.is_empty() && !tag.is_empty() => {
                    self.insert(form, tag);
                }
                _ => self.insert_form(entry),
            }
            added += 1;
        }
        added
    }

    /// Adds a `(form, tag)` stopword.
    pub fn insert(&mut self, form: impl Into<String>, tag: impl Into<String>) {
        self.tagged.entry(form.into()).or_default().insert(tag.into());
    }

    /// Adds a form that is a stopword under any tag.
    pub fn insert_form(&mut self, form: impl Into<String>) {
        self.forms.insert(form.into());
    }

    /// Returns whether the token `form/tag` is a stopword.
    pub fn contains(&self, form: &str, tag: &str) -> bool {
        self.forms.contains(form) || self.tagged.get(form).is_some_and(|tags| tags.contains(tag))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.tagged.values().map(HashSet::len).sum::<usize>() + self.forms.len()
    }

    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tagged.is_empty() && self.forms.is_empty()
    }

    /// Entries rendered as `form/TAG` or `form`, sorted.
    pub fn entries(&self) -> Vec<String> {
        let sorted: BTreeSet<String> = self
            .tagged
            .iter()
            .flat_map(|(form, tags)| tags.iter().map(move |tag| format!("{form}/{tag}")))
            .chain(self.forms.iter().cloned())
            .collect();
        sorted.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_contains_function_morphemes() {
        let set = StopwordSet::default();
        assert!(set.contains("것", "NNB"));
        assert!(set.contains("하", "VV"));
        assert!(!set.contains("학교", "NNG"));
        assert!(!set.is_empty());
    }

    #[test]
    fn test_tag_sensitive() {
        let set = StopwordSet::default();
        assert!(set.contains("이", "VCP"));
        assert!(!set.contains("이", "JKS"));
    }

    #[test]
    fn test_parse_formats() {
        let set = StopwordSet::parse("# comment\n\n학교/NNG\nAI\n1/2/SN\n  공백/NNG  \n");
        assert!(set.contains("학교", "NNG"));
        assert!(!set.contains("학교", "NNP"));
        assert!(set.contains("AI", "SL"));
        assert!(set.contains("AI", "NNP"));
        assert!(set.contains("1/2", "SN"));
        assert!(set.contains("공백", "NNG"));
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_same_form_under_several_tags() {
        let set = StopwordSet::from_pairs(&[("이", "VCP"), ("이", "NP"), ("이", "VCP")]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("이", "VCP"));
        assert!(set.contains("이", "NP"));
        assert!(!set.contains("이", "JKS"));
        assert!(!set.contains("이다", "VCP"));
        assert_eq!(set.entries(), vec!["이/NP", "이/VCP"]);
    }

    #[test]
    fn test_trailing_slash_is_bare_form() {
        let set = StopwordSet::parse("http:/\n");
        assert!(set.contains("http:/", "SW"));
    }

    #[test]
    fn test_empty() {
        let set = StopwordSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains("것", "NNB"));
    }

    #[test]
    fn test_entries_sorted() {
        let set = StopwordSet::parse("나/NP\n가/VV\n다\n");
        assert_eq!(set.entries(), vec!["가/VV", "나/NP", "다"]);
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "기술/NNG").unwrap();
        writeln!(file, "발전").unwrap();
        let set = StopwordSet::load(file.path()).unwrap();
        assert!(set.contains("기술", "NNG"));
        assert!(set.contains("발전", "NNG"));
    }

    #[test]
    fn test_extend_default_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "기술/NNG").unwrap();
        let mut set = StopwordSet::default();
        let before = set.len();
        assert_eq!(set.extend_from_file(file.path()).unwrap(), 1);
        assert_eq!(set.len(), before + 1);
        assert!(set.contains("것", "NNB"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = StopwordSet::load("/nonexistent/stopwords.txt").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Io(crate::error::IoError::FileNotFound { .. })
        ));
    }
}
