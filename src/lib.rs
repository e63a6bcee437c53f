//! TUI Hangman (workspace facade crate).
//!
//! This package exposes the `tui_hangman::{core,engine,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub mod config;

pub use tui_hangman_core as core;
pub use tui_hangman_engine as engine;
pub use tui_hangman_input as input;
pub use tui_hangman_term as term;
pub use tui_hangman_types as types;
