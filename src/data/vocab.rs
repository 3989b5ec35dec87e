//! Character vocabulary built from a corpus.
//!
//! Symbols are ordered by first occurrence in the text and never change
//! after construction. Maps between characters and indices for one-hot
//! encoding.

use ndarray::Array1;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::{TextDataError, TextDataResult};

/// Character-to-index vocabulary for one-hot encoding.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Unique characters in first-occurrence order.
    chars: Vec<char>,
    /// Reverse mapping from character to index.
    char_to_idx: HashMap<char, u32>,
}

impl Vocabulary {
    /// Scan `text` once and collect every distinct character in the order it
    /// first appears.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut chars = Vec::new();
        let mut char_to_idx = HashMap::new();
        for c in text.chars() {
            if let Entry::Vacant(slot) = char_to_idx.entry(c) {
                slot.insert(chars.len() as u32);
                chars.push(c);
            }
        }
        Self { chars, char_to_idx }
    }

    /// Number of characters in the vocabulary.
    #[must_use]
    pub fn size(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Ordered symbols, as handed to external writers.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Get the index for a character, or `None` if not in vocabulary.
    #[must_use]
    pub fn char_to_index(&self, c: char) -> Option<u32> {
        self.char_to_idx.get(&c).copied()
    }

    /// Get the character for an index, or `None` if out of bounds.
    #[must_use]
    pub fn index_to_char(&self, idx: usize) -> Option<char> {
        self.chars.get(idx).copied()
    }

    /// Encode `text` as vocabulary indices, one per character.
    ///
    /// # Errors
    ///
    /// Returns [`TextDataError::UnknownSymbol`] for the first character that
    /// is not in the vocabulary.
    pub fn encode(&self, text: &str) -> TextDataResult<Vec<u32>> {
        text.chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.char_to_index(symbol)
                    .ok_or(TextDataError::UnknownSymbol { symbol, position })
            })
            .collect()
    }

    /// Decode indices back to text. Out-of-range indices render as U+FFFD.
    #[must_use]
    pub fn decode(&self, indices: &[u32]) -> String {
        indices
            .iter()
            .map(|&i| {
                self.index_to_char(i as usize)
                    .unwrap_or(char::REPLACEMENT_CHARACTER)
            })
            .collect()
    }

    /// One-hot encode a single character as a vector of length `self.size()`.
    /// Returns a zero vector if the character is not in the vocabulary.
    #[must_use]
    pub fn one_hot(&self, c: char) -> Array1<f32> {
        let mut v = Array1::zeros(self.size());
        if let Some(idx) = self.char_to_index(c) {
            v[idx as usize] = 1.0;
        }
        v
    }
}
