//! Game engine - the round loop between console and renderer.
//!
//! [`Controller`] owns everything a session needs and runs the state machine
//! `Setup -> Playing <-> RoundOver -> {Playing, Terminal}`. Input and output
//! come in through the [`InputSource`](crate::input::InputSource) and
//! [`Screen`](crate::term::Screen) traits, so a whole session can be scripted
//! in tests without a terminal.

pub mod controller;

pub use tui_hangman_core as core;
pub use tui_hangman_input as input;
pub use tui_hangman_term as term;
pub use tui_hangman_types as types;

pub use controller::{
    Controller, Exit, GameConfig, Phase, SetupError, Turn, GUESS_PROMPT, REPLAY_PROMPT,
};
