//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for the hangman console.
//! It avoids any widget toolkit and instead composites text fragments into a
//! fixed-size character grid that is flushed to the terminal in one write.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Catch layout mistakes once at setup instead of on every frame
//! - Redraw the whole frame each turn so no stale text survives

pub mod game_view;
pub mod grid;
pub mod renderer;

pub use tui_hangman_core as core;
pub use tui_hangman_types as types;

pub use game_view::{GameView, Layout, LayoutError};
pub use grid::{PlaceError, TextGrid};
pub use renderer::{encode_frame_into, Screen, TerminalRenderer};
