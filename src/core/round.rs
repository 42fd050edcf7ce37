//! Round state: one play-through of guessing a single secret word.
//!
//! A round tracks the secret word, the letters guessed so far (in guess
//! order), the wrong-guess count, and the round status. All guard
//! conditions are silent no-ops: guessing a duplicate letter or guessing
//! after the round has ended does nothing.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Wrong guesses allowed before the round is lost.
///
/// Matches the number of reveal stages in the gallows illustration.
pub const MAX_WRONG_GUESSES: u8 = 6;

/// Status of a round.
///
/// `Won` and `Lost` are terminal; the only way forward from either is a
/// fresh round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    Playing,
    Won,
    Lost,
}

/// What a single guess did to the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Round already over or letter already guessed; nothing changed.
    Ignored,
    /// Letter is in the word but the word is not yet complete.
    Correct,
    /// Letter is not in the word; guesses remain.
    Wrong,
    /// This guess completed the word.
    Won,
    /// This guess was the last allowed wrong guess.
    Lost,
}

/// Mutable state of one word being guessed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    secret_word: String,
    /// Unique letters in guess order. At most 26 distinct ASCII letters,
    /// so the buffer never spills to the heap.
    guessed_letters: SmallVec<[char; 26]>,
    wrong_guesses: u8,
    status: RoundStatus,
}

impl Round {
    /// Start a round for the given secret word.
    ///
    /// The secret is expected to be normalized (trimmed, upper-cased)
    /// already; `WordList` entries are.
    #[must_use]
    pub fn new(secret_word: impl Into<String>) -> Self {
        Self {
            secret_word: secret_word.into(),
            guessed_letters: SmallVec::new(),
            wrong_guesses: 0,
            status: RoundStatus::Playing,
        }
    }

    /// Get the secret word.
    #[must_use]
    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    /// Get the guessed letters in guess order.
    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    /// Get the wrong-guess count.
    #[must_use]
    pub fn wrong_guesses(&self) -> u8 {
        self.wrong_guesses
    }

    /// Get the number of wrong guesses still allowed.
    #[must_use]
    pub fn guesses_remaining(&self) -> u8 {
        MAX_WRONG_GUESSES - self.wrong_guesses
    }

    /// Get the round status.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Check if a letter has been guessed this round.
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&letter)
    }

    /// Check if a character of the secret is visible to the guessers.
    ///
    /// Spaces are always revealed; they separate multi-word phrases and
    /// never need to be guessed.
    #[must_use]
    pub fn is_revealed(&self, ch: char) -> bool {
        ch == ' ' || self.has_guessed(ch)
    }

    /// Check if every non-space character of the secret has been guessed.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.secret_word.chars().all(|ch| self.is_revealed(ch))
    }

    /// Get the secret with unrevealed characters replaced by `_`.
    ///
    /// ```
    /// use gallows::core::Round;
    ///
    /// let mut round = Round::new("ICE CREAM");
    /// round.apply_guess('C');
    /// round.apply_guess('E');
    /// assert_eq!(round.masked_word(), "_CE C_E__");
    /// ```
    #[must_use]
    pub fn masked_word(&self) -> String {
        self.secret_word
            .chars()
            .map(|ch| if self.is_revealed(ch) { ch } else { '_' })
            .collect()
    }

    /// Apply a guessed letter to the round.
    ///
    /// The letter is expected to be upper-cased already; the engine
    /// normalizes input before calling. Returns `Ignored` without touching
    /// state when the round is over or the letter is a repeat.
    ///
    /// The wrong-guess branch is evaluated before the win check. The two
    /// are mutually exclusive in practice (a wrong guess cannot complete
    /// the word), but the order is part of the round's contract.
    pub fn apply_guess(&mut self, letter: char) -> GuessOutcome {
        if self.status != RoundStatus::Playing || self.has_guessed(letter) {
            return GuessOutcome::Ignored;
        }

        self.guessed_letters.push(letter);

        let mut outcome = GuessOutcome::Correct;

        if !self.secret_word.contains(letter) {
            self.wrong_guesses += 1;
            outcome = GuessOutcome::Wrong;

            if self.wrong_guesses >= MAX_WRONG_GUESSES {
                self.status = RoundStatus::Lost;
                outcome = GuessOutcome::Lost;
            }
        }

        if self.is_solved() {
            self.status = RoundStatus::Won;
            outcome = GuessOutcome::Won;
        }

        outcome
    }
}
