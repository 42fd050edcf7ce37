//! Core game types: teams, RNG, word lists, rounds.
//!
//! This module contains the building blocks the engine is assembled from.
//! The engine in [`crate::engine`] owns one of each and enforces the
//! cross-cutting rules (scoring, turn rotation).

pub mod round;
pub mod rng;
pub mod team;
pub mod words;

pub use round::{GuessOutcome, Round, RoundStatus, MAX_WRONG_GUESSES};
pub use rng::GameRng;
pub use team::{TeamId, TeamScores};
pub use words::{WordList, WordListError, DEFAULT_WORD_LIST};
