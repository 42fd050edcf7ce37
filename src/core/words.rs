//! Word list parsing and random word selection.
//!
//! The candidate pool is parsed from a free-form comma-separated string:
//! each piece is trimmed and upper-cased, empty pieces are dropped.
//! A list that ends up with zero entries is rejected rather than guessed at.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rng::GameRng;

/// Word list the original game ships with.
pub const DEFAULT_WORD_LIST: &str = "apple,banana,computer,hangman,python";

/// Errors from word-list parsing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WordListError {
    /// The raw input contained no non-empty comma-separated token.
    #[error("word list has no usable entries")]
    Empty,
}

/// Normalized candidate pool for secret words.
///
/// Invariant: contains at least one entry, every entry is trimmed,
/// upper-cased, and non-empty.
///
/// ## Example
///
/// ```
/// use gallows::core::WordList;
///
/// let list = WordList::parse("apple, Banana ,COMPUTER").unwrap();
/// assert_eq!(list.words(), &["APPLE", "BANANA", "COMPUTER"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parse a raw comma-separated word list.
    ///
    /// Each piece is trimmed and upper-cased; empty and whitespace-only
    /// pieces are excluded. Returns `WordListError::Empty` if nothing
    /// survives.
    pub fn parse(raw: &str) -> Result<Self, WordListError> {
        let words: Vec<String> = raw
            .split(',')
            .map(|piece| piece.trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(Self { words })
    }

    /// Get the normalized entries in input order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Get the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: an empty list never parses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check if a word is in the pool.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Pick an entry uniformly at random.
    ///
    /// The invariant guarantees at least one entry, so this never fails.
    #[must_use]
    pub fn pick(&self, rng: &mut GameRng) -> &str {
        let index = rng.gen_range_usize(0..self.words.len());
        &self.words[index]
    }
}
