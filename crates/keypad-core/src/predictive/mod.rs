//! T9 prefix matching over a sorted dictionary.
//!
//! The engine keeps the digits typed so far and the contiguous run of
//! dictionary rows whose key sequence starts with them. Every edit re-scans
//! from the top of the dictionary and stops at the first miss after the run,
//! which keeps the cost at O(first match + run length) per keystroke.


use std::sync::Arc;

use tracing::{debug, debug_span};

use crate::dict::Dictionary;

/// Longest digit sequence the engine accepts.
pub const MAX_SEQUENCE_LENGTH: usize = 10;
/// Words longer than this are shown truncated.
pub const MAX_WORD_LENGTH: usize = 15;

pub struct PredictiveEngine {
    dict: Arc<dyn Dictionary>,
    sequence: String,
    first_match: usize,
    candidate_count: usize,
    current: usize,
}

impl PredictiveEngine {
    pub fn new(dict: Arc<dyn Dictionary>) -> Self {
        Self {
            dict,
            sequence: String::with_capacity(MAX_SEQUENCE_LENGTH),
            first_match: 0,
            candidate_count: 0,
            current: 0,
        }
    }

    /// Append a digit `'2'..='9'` and re-match. Ignored when the sequence is
    /// full or the digit has no letters.
    pub fn add_digit(&mut self, digit: char) {
        if !('2'..='9').contains(&digit) || self.sequence.len() >= MAX_SEQUENCE_LENGTH {
            return;
        }
        self.sequence.push(digit);
        self.find_matches();
    }

    /// Drop the last digit and re-match.
    pub fn backspace(&mut self) {
        if self.sequence.pop().is_none() {
            return;
        }
        if self.sequence.is_empty() {
            self.clear_matches();
        } else {
            self.find_matches();
        }
    }

    pub fn reset(&mut self) {
        self.sequence.clear();
        self.clear_matches();
    }

    /// The active candidate, truncated to `MAX_WORD_LENGTH` characters.
    pub fn current_word(&self) -> Option<&str> {
        if !self.has_matches() {
            return None;
        }
        let word = self.dict.word(self.first_match + self.current)?;
        Some(match word.char_indices().nth(MAX_WORD_LENGTH) {
            Some((end, _)) => &word[..end],
            None => word,
        })
    }

    /// Advance to the next candidate, wrapping to the first.
    pub fn next_candidate(&mut self) -> bool {
        if !self.has_matches() {
            return false;
        }
        self.current = (self.current + 1) % self.candidate_count;
        true
    }

    /// Step back to the previous candidate, wrapping to the last.
    pub fn previous_candidate(&mut self) -> bool {
        if !self.has_matches() {
            return false;
        }
        self.current = self
            .current
            .checked_sub(1)
            .unwrap_or(self.candidate_count - 1);
        true
    }

    pub fn key_sequence(&self) -> &str {
        &self.sequence
    }

    pub fn sequence_len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_full(&self) -> bool {
        self.sequence.len() >= MAX_SEQUENCE_LENGTH
    }

    pub fn candidate_count(&self) -> usize {
        self.candidate_count
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn has_matches(&self) -> bool {
        self.candidate_count > 0
    }

    /// Dictionary row range `[first, first + count)` of the current run.
    pub fn match_range(&self) -> std::ops::Range<usize> {
        self.first_match..self.first_match + self.candidate_count
    }

    /// Text the engine would have on screen: the active candidate, or the
    /// raw digits when nothing matches.
    pub fn display(&self) -> &str {
        self.current_word().unwrap_or(self.sequence.as_str())
    }

    fn clear_matches(&mut self) {
        self.first_match = 0;
        self.candidate_count = 0;
        self.current = 0;
    }

    fn find_matches(&mut self) {
        let _span = debug_span!("find_matches", seq = %self.sequence).entered();
        self.clear_matches();
        if self.sequence.is_empty() {
            return;
        }

        let mut found = false;
        for index in 0..self.dict.len() {
            if self.matches_entry(index) {
                if !found {
                    self.first_match = index;
                    found = true;
                }
                self.candidate_count += 1;
            } else if found {
                // Sorted by sequence: the run of matches is contiguous.
                break;
            }
        }
        debug!(
            first = self.first_match,
            count = self.candidate_count,
            "matched"
        );
    }

    fn matches_entry(&self, index: usize) -> bool {
        self.dict
            .key_sequence(index)
            .is_some_and(|seq| seq.as_bytes().starts_with(self.sequence.as_bytes()))
    }
}
