use std::collections::HashSet;

use tracing::debug;

use super::{DictError, Dictionary};
use crate::keymap::word_to_sequence;

/// Owned dictionary built from a frequency-ordered word list.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    entries: Vec<(String, String)>,
}

impl WordList {
    /// Build from words in frequency order, keeping at most `max_words`.
    ///
    /// Words are lower-cased; duplicates and words containing characters
    /// outside `a`-`z` are skipped. Rows are sorted stably by key sequence,
    /// so words sharing a sequence stay in frequency order.
    pub fn from_words<I, S>(words: I, max_words: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        let mut skipped = 0usize;
        for raw in words {
            if entries.len() >= max_words {
                break;
            }
            let word = raw.as_ref().trim().to_lowercase();
            if word.is_empty() || seen.contains(&word) {
                continue;
            }
            let Some(seq) = word_to_sequence(&word) else {
                skipped += 1;
                continue;
            };
            seen.insert(word.clone());
            entries.push((seq, word));
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        debug!(kept = entries.len(), skipped, "built word list");
        Self { entries }
    }

    /// Wrap rows that are already `(sequence, word)` pairs, checking the
    /// sort precondition.
    pub fn from_sorted(entries: Vec<(String, String)>) -> Result<Self, DictError> {
        let list = Self { entries };
        list.validate()?;
        Ok(list)
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}

impl Dictionary for WordList {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn key_sequence(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(seq, _)| seq.as_str())
    }

    fn word(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(_, word)| word.as_str())
    }
}
