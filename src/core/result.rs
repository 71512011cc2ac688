//! Per-line result object.

use serde::{Deserialize, Serialize};

/// The object emitted for one input line.
///
/// Serializes to `{"data": [...]}`. The field name is part of the output
/// contract and must not change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterResult {
    /// Surviving token forms in sentence order.
    pub data: Vec<String>,
}

impl FilterResult {
    /// Number of surviving forms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether no token survived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl FromIterator<String> for FilterResult {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}
