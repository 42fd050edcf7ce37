//! The game engine: owns all round and session state and exposes the
//! operations that drive the round-by-round loop.
//!
//! The presentation layer is a pure consumer. It forwards two kinds of user
//! intent — "word list changed" and "letter guessed" — and reads a
//! [`Snapshot`] back to render. It never mutates state directly.
//!
//! ## Rules enforced here
//!
//! - A round ends `Won` when every non-space character of the secret has
//!   been guessed, `Lost` on the sixth wrong guess.
//! - The ending team gains a point on a win and loses one on a loss.
//! - The turn flips exactly once per round, at the moment it ends.
//!   Manual resets and word-list changes never touch scores or the turn.
//!
//! ## Example
//!
//! ```
//! use gallows::{GameEngine, RoundStatus, TeamId};
//!
//! let mut engine = GameEngine::builder()
//!     .word_list("cat")
//!     .build(42)
//!     .unwrap();
//!
//! for letter in ['c', 'a', 't'] {
//!     engine.guess_letter(letter);
//! }
//!
//! let snapshot = engine.snapshot();
//! assert_eq!(snapshot.status, RoundStatus::Won);
//! assert_eq!(snapshot.team_scores, [1, 0]);
//! assert_eq!(snapshot.current_team, TeamId::Two);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{
    GameRng, GuessOutcome, Round, RoundStatus, TeamId, TeamScores, WordList, WordListError,
    DEFAULT_WORD_LIST, MAX_WRONG_GUESSES,
};

/// Read-only view of the engine state for the presentation layer.
///
/// Everything a renderer needs: the secret for per-letter reveal, the
/// masked projection, guessed letters in guess order, the wrong-guess
/// count that drives the gallows illustration, and the session standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub secret_word: String,
    pub masked_word: String,
    pub guessed_letters: Vec<char>,
    pub wrong_guesses: u8,
    pub guesses_remaining: u8,
    pub status: RoundStatus,
    pub current_team: TeamId,
    /// `[team 1, team 2]` scores.
    pub team_scores: [i64; 2],
}

/// Builder for creating a [`GameEngine`].
///
/// Defaults to the stock word list with Team 1 up first.
pub struct GameEngineBuilder {
    word_list: String,
    starting_team: TeamId,
}

impl Default for GameEngineBuilder {
    fn default() -> Self {
        Self {
            word_list: DEFAULT_WORD_LIST.to_string(),
            starting_team: TeamId::One,
        }
    }
}

impl GameEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw comma-separated word list.
    pub fn word_list(mut self, raw: impl Into<String>) -> Self {
        self.word_list = raw.into();
        self
    }

    /// Set which team guesses first.
    pub fn starting_team(mut self, team: TeamId) -> Self {
        self.starting_team = team;
        self
    }

    /// Build the engine with a fixed RNG seed.
    ///
    /// Fails if the word list parses to zero usable entries.
    pub fn build(self, seed: u64) -> Result<GameEngine, WordListError> {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build the engine seeded from OS entropy.
    pub fn build_from_entropy(self) -> Result<GameEngine, WordListError> {
        self.build_with_rng(GameRng::from_entropy())
    }

    /// Build the engine with an explicit RNG.
    pub fn build_with_rng(self, mut rng: GameRng) -> Result<GameEngine, WordListError> {
        let words = WordList::parse(&self.word_list)?;
        let round = Round::new(words.pick(&mut rng));

        debug!(
            "engine built: {} words, {} starts, seed {}",
            words.len(),
            self.starting_team,
            rng.seed()
        );

        Ok(GameEngine {
            words,
            round,
            scores: TeamScores::new(),
            current_team: self.starting_team,
            rng,
        })
    }
}

/// The hangman game engine.
///
/// Owns the word list, the active [`Round`], and the session state that
/// survives rounds (team scores, whose turn it is). Single-threaded and
/// synchronous: every operation runs to completion immediately.
#[derive(Clone, Debug)]
pub struct GameEngine {
    words: WordList,
    round: Round,
    scores: TeamScores,
    current_team: TeamId,
    rng: GameRng,
}

impl GameEngine {
    /// Start building an engine.
    #[must_use]
    pub fn builder() -> GameEngineBuilder {
        GameEngineBuilder::new()
    }

    /// Replace the word list and immediately start a new round from it.
    ///
    /// Scores and the current team are untouched: word-list changes are
    /// not round ends. If the raw input parses to zero usable entries the
    /// previous list and round stay in place and an error is returned.
    pub fn set_word_list(&mut self, raw: &str) -> Result<(), WordListError> {
        let words = WordList::parse(raw)?;
        debug!("word list replaced: {} words", words.len());
        self.words = words;
        self.start_round();
        Ok(())
    }

    /// Start a fresh round with a newly picked secret word.
    ///
    /// The secret is chosen uniformly at random from the current word list
    /// and may repeat the previous word. Guessed letters, the wrong-guess
    /// count, and the status all reset; scores and the current team do not.
    pub fn start_round(&mut self) {
        let secret = self.words.pick(&mut self.rng);
        debug!("round started: {} characters, {} up", secret.len(), self.current_team);
        self.round = Round::new(secret);
    }

    /// Apply a letter guess from the current team.
    ///
    /// Input is case-insensitive; the letter is upper-cased before
    /// comparison. Guessing after the round has ended or repeating a
    /// letter is a silent no-op, not an error.
    pub fn guess_letter(&mut self, letter: char) {
        let letter = letter.to_ascii_uppercase();

        match self.round.apply_guess(letter) {
            GuessOutcome::Won => {
                debug!("round won by {}", self.current_team);
                self.scores[self.current_team] += 1;
                self.current_team = self.current_team.other();
            }
            GuessOutcome::Lost => {
                debug!("round lost by {}", self.current_team);
                self.scores[self.current_team] -= 1;
                self.current_team = self.current_team.other();
            }
            GuessOutcome::Correct | GuessOutcome::Wrong | GuessOutcome::Ignored => {}
        }
    }

    /// Get the current word list.
    #[must_use]
    pub fn word_list(&self) -> &WordList {
        &self.words
    }

    /// Get the active round.
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Get the team that owns the active round.
    #[must_use]
    pub fn current_team(&self) -> TeamId {
        self.current_team
    }

    /// Get the session scores.
    #[must_use]
    pub fn scores(&self) -> &TeamScores {
        &self.scores
    }

    /// Take a read-only snapshot of the full engine state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            secret_word: self.round.secret_word().to_string(),
            masked_word: self.round.masked_word(),
            guessed_letters: self.round.guessed_letters().to_vec(),
            wrong_guesses: self.round.wrong_guesses(),
            guesses_remaining: self.round.guesses_remaining(),
            status: self.round.status(),
            current_team: self.current_team,
            team_scores: self.scores.as_array(),
        }
    }
}
