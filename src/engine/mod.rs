//! Adversarial game state management
//!
//! The keeper side of Hangman: candidate tracking, guess recording, and the
//! partition-and-keep-the-largest-family selection that makes the hidden word
//! a moving target.

mod game;
mod partition;

pub use game::{GameError, HangmanGame};
