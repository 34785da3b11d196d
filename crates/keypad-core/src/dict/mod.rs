//! Read-only T9 dictionary storage.
//!
//! A dictionary is a table of `(key sequence, word)` rows sorted by key
//! sequence. The predictive engine relies on that order for early scan
//! termination and never sorts at runtime, so every table is checked once
//! when it is built.
//!
//! - `StaticDictionary` wraps a `&'static [T9Entry]` compiled into the binary.
//! - `WordList` owns its rows and is built from a frequency-ordered word list.

mod default_table;
mod entry;
#[cfg(test)]
mod tests;
mod word_list;

pub use entry::T9Entry;
pub use word_list::WordList;

use crate::keymap::word_to_sequence;

/// Compiled-in English dictionary.
pub static DEFAULT_DICTIONARY: StaticDictionary = StaticDictionary::new(&default_table::ENTRIES);

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("entry {index} ({seq:?}) sorts before its predecessor {prev:?}")]
    Unsorted {
        index: usize,
        seq: String,
        prev: String,
    },

    #[error("entry {index}: key sequence {seq:?} must be non-empty digits 2-9")]
    InvalidSequence { index: usize, seq: String },

    #[error("entry {index}: word {word:?} does not spell key sequence {seq:?}")]
    Mismatch {
        index: usize,
        seq: String,
        word: String,
    },

    #[error("dictionary is empty")]
    Empty,
}

pub trait Dictionary: Send + Sync {
    fn len(&self) -> usize;
    fn key_sequence(&self, index: usize) -> Option<&str>;
    fn word(&self, index: usize) -> Option<&str>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Verify the sort precondition and that every word spells its sequence.
    fn validate(&self) -> Result<(), DictError> {
        if self.is_empty() {
            return Err(DictError::Empty);
        }
        let mut prev: Option<&str> = None;
        for index in 0..self.len() {
            let (Some(seq), Some(word)) = (self.key_sequence(index), self.word(index)) else {
                continue;
            };
            if seq.is_empty() || !seq.bytes().all(|b| (b'2'..=b'9').contains(&b)) {
                return Err(DictError::InvalidSequence {
                    index,
                    seq: seq.to_string(),
                });
            }
            if word_to_sequence(word).as_deref() != Some(seq) {
                return Err(DictError::Mismatch {
                    index,
                    seq: seq.to_string(),
                    word: word.to_string(),
                });
            }
            if let Some(p) = prev {
                if seq < p {
                    return Err(DictError::Unsorted {
                        index,
                        seq: seq.to_string(),
                        prev: p.to_string(),
                    });
                }
            }
            prev = Some(seq);
        }
        Ok(())
    }
}

/// Dictionary backed by a static, pre-sorted table.
#[derive(Debug, Clone, Copy)]
pub struct StaticDictionary {
    entries: &'static [T9Entry],
}

impl StaticDictionary {
    pub const fn new(entries: &'static [T9Entry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [T9Entry] {
        self.entries
    }
}

impl Dictionary for StaticDictionary {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn key_sequence(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.seq)
    }

    fn word(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.word)
    }
}
