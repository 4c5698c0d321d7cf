//! Evil Hangman engine
//!
//! An adversarial Hangman keeper that never commits to a secret word. The
//! engine tracks every dictionary word still consistent with play so far;
//! after each guess it groups those candidates by the pattern each word would
//! produce and keeps the largest group, so the "answer" stays as ambiguous as
//! possible for as long as possible.
//!
//! This is a pure in-memory library. Reading dictionaries, prompting the
//! player, and rendering the board all belong to the driver that calls it.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::engine::HangmanGame;
//!
//! let mut game = HangmanGame::new(["dog", "dot", "cat"], 3, 5).unwrap();
//! assert_eq!(game.pattern().unwrap(), "- - -");
//!
//! // "dog" and "dot" share "- o -", so that family survives the guess.
//! assert_eq!(game.record('o').unwrap(), 1);
//! assert_eq!(game.pattern().unwrap(), "- o -");
//! assert_eq!(game.guesses_left(), 5);
//! ```

// Core domain types
pub mod core;

// Adversarial game state management
pub mod engine;
