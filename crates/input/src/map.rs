//! Mapping from typed characters to game input.

use crate::types::Letter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{0:?} is not a letter")]
    NotALetter(char),
}

/// Map a typed character to a guess.
pub fn map_guess(ch: char) -> Result<Letter, InputError> {
    Letter::from_char(ch).ok_or(InputError::NotALetter(ch))
}

/// Whether the answer to "play again?" is yes.
pub fn is_replay(ch: char) -> bool {
    matches!(ch, 'y' | 'Y')
}
