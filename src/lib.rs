//! # gallows
//!
//! A two-team hangman game engine.
//!
//! ## Design Principles
//!
//! 1. **Engine-only**: No rendering, input handling, or persistence.
//!    The presentation layer supplies a raw comma-separated word list,
//!    forwards letter guesses, and reads a [`Snapshot`] back to draw.
//!
//! 2. **Explicit state ownership**: The [`GameEngine`] exclusively owns
//!    round and session state; its operations are the only mutators.
//!
//! 3. **Deterministic when seeded**: Word selection goes through an
//!    injectable [`GameRng`], so tests reproduce exact games from a seed.
//!
//! ## Rules
//!
//! Two teams take turns guessing one secret word per round. Six wrong
//! guesses lose the round (one gallows stage per wrong guess); revealing
//! every non-space letter wins it. The team that ends a round gains or
//! loses a point and the turn passes to the other team. Scores persist
//! across rounds and word-list changes.
//!
//! ## Modules
//!
//! - `core`: Teams, scores, RNG, word lists, rounds
//! - `engine`: The game engine and its snapshot surface

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GuessOutcome, Round, RoundStatus, TeamId, TeamScores, WordList, WordListError,
    DEFAULT_WORD_LIST, MAX_WRONG_GUESSES,
};

pub use crate::engine::{GameEngine, GameEngineBuilder, Snapshot};
