//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the hangman rules, round state and word rotation.
//! The round logic has **no dependencies** on the terminal or the console, making it:
//!
//! - **Deterministic**: The shuffle source is injected, so tests can fix the word order
//! - **Testable**: Every transition is a plain method call
//! - **Portable**: Any front end can drive a round through [`GameState::guess`]
//!
//! # Module Structure
//!
//! - [`game_state`]: Word, guessed letters, lives and win/lose detection
//! - [`rng`]: Seeded shuffle and the self-refilling word pool
//! - [`stages`]: Gallows art stages indexed by lives
//! - [`resources`]: Word list and stage file parsing
//! - [`snapshot`]: Read-only per-frame view of a round
//!
//! # Game Rules
//!
//! - **Lives**: 11 per round; a wrong guess or a repeated guess costs one
//! - **Win**: every distinct letter of the word has been guessed
//! - **Loss**: lives reach zero, whatever letters are still hidden
//! - **Rotation**: words are drawn from a shuffled pool, reshuffled when exhausted
//!
//! # Example
//!
//! ```
//! use tui_hangman_core::GameState;
//! use tui_hangman_types::{Letter, RoundStatus};
//!
//! let mut game = GameState::new();
//! game.start_round("cat").unwrap();
//!
//! for ch in ['c', 'a', 't'] {
//!     game.guess(Letter::from_char(ch).unwrap()).unwrap();
//! }
//!
//! assert_eq!(game.masked_word(), "CAT");
//! assert_eq!(game.status(), RoundStatus::Won);
//! ```

pub mod game_state;
pub mod resources;
pub mod rng;
pub mod snapshot;
pub mod stages;

pub use tui_hangman_types as types;

// Re-export commonly used types for convenience
pub use game_state::{validate_word, GameState, GuessResult, RoundError};
pub use resources::{load_stages, load_words, parse_stages, parse_words, LoadError};
pub use rng::{IdentityShuffle, Shuffle, SimpleRng, WordPool};
pub use snapshot::RoundSnapshot;
pub use stages::{Stage, StageSet};
