use arrayvec::ArrayString;

use crate::types::{RoundStatus, ALPHABET_LEN};

/// Read-only view of a round, captured once per frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoundSnapshot {
    pub mask: String,
    pub wrong_letters: ArrayString<ALPHABET_LEN>,
    pub message: String,
    pub lives: u8,
    pub max_lives: u8,
    pub status: RoundStatus,
    pub round_id: u32,
}

impl RoundSnapshot {
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }
}
