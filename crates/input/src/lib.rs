//! Console input module (engine-facing).
//!
//! This module is independent of the terminal renderer. It reads
//! whitespace-delimited tokens from any buffered reader, hands back the first
//! character of each, and maps characters to guesses or replay answers.

pub mod map;
pub mod reader;

pub use tui_hangman_types as types;

pub use map::{is_replay, map_guess, InputError};
pub use reader::{InputSource, TokenReader};
