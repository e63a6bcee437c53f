//! Game state module - manages a single hangman round
//!
//! This module owns the hidden word, the guessed letters and the lives counter.
//! It handles the guess transition, win/lose detection and the derived views the
//! renderer needs (mask, wrong letters, status message). It performs no I/O.

use arrayvec::ArrayString;

use crate::snapshot::RoundSnapshot;
use crate::types::*;

/// Errors raised by misuse of the round state machine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("word {0:?} contains no letters")]
    EmptyWord(String),
    #[error("word {0:?} contains a non-letter")]
    InvalidWord(String),
    #[error("a round needs at least one life")]
    NoLives,
    #[error("round is already {}; start a new round first", .0.as_str())]
    RoundOver(RoundStatus),
}

/// Result of a single guess transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessResult {
    pub outcome: GuessOutcome,
    pub status: RoundStatus,
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct GameState {
    word: String,
    word_letters: LetterSet,
    /// Letters of the word not yet revealed (shrinks).
    remaining: LetterSet,
    /// Every letter tried this round, right or wrong (grows).
    guessed: LetterSet,
    lives: u8,
    max_lives: u8,
    status: RoundStatus,
    last_outcome: Option<GuessOutcome>,
    /// Monotonic round id (increments on every `start_round`).
    round_id: u32,
}

impl GameState {
    /// Create an idle state with the default number of lives
    pub fn new() -> Self {
        Self::with_max_lives(MAX_LIVES)
    }

    /// Create an idle state whose rounds start with `max_lives` lives
    pub fn with_max_lives(max_lives: u8) -> Self {
        Self {
            word: String::new(),
            word_letters: LetterSet::new(),
            remaining: LetterSet::new(),
            guessed: LetterSet::new(),
            lives: max_lives,
            max_lives,
            status: RoundStatus::Playing,
            last_outcome: None,
            round_id: 0,
        }
    }

    /// Start a new round for `word`
    ///
    /// The word is upper-cased. It must be made of ASCII letters only and the
    /// state must have at least one life, otherwise the round could not end
    /// the way its status claims.
    pub fn start_round(&mut self, word: &str) -> Result<(), RoundError> {
        if self.max_lives == 0 {
            return Err(RoundError::NoLives);
        }
        validate_word(word)?;
        let word_letters = LetterSet::from_word(word);

        self.word = word.to_ascii_uppercase();
        self.word_letters = word_letters;
        self.remaining = word_letters;
        self.guessed.clear();
        self.lives = self.max_lives;
        self.status = RoundStatus::Playing;
        self.last_outcome = None;
        self.round_id = self.round_id.wrapping_add(1);

        log::debug!(
            "round {} started ({} letters, {} distinct)",
            self.round_id,
            self.word.len(),
            word_letters.len()
        );
        Ok(())
    }

    /// Apply one guess
    ///
    /// Lives are only ever decremented on the repeat and wrong branches, and the
    /// loss check runs after the decrement. The win check runs only on the
    /// correct branch, so a single guess can never both win and lose.
    pub fn guess(&mut self, letter: Letter) -> Result<GuessResult, RoundError> {
        if self.status.is_over() {
            return Err(RoundError::RoundOver(self.status));
        }

        let outcome = if self.guessed.contains(letter) {
            self.lose_life();
            GuessOutcome::AlreadyGuessed
        } else if self.word_letters.contains(letter) {
            self.guessed.insert(letter);
            self.remaining.remove(letter);
            if self.remaining.is_empty() {
                self.status = RoundStatus::Won;
            }
            GuessOutcome::Correct
        } else {
            self.guessed.insert(letter);
            self.lose_life();
            GuessOutcome::Wrong
        };

        self.last_outcome = Some(outcome);
        Ok(GuessResult {
            outcome,
            status: self.status,
        })
    }

    fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.status = RoundStatus::Lost;
        }
    }

    /// The word with every unguessed letter replaced by the placeholder
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|ch| match Letter::from_char(ch) {
                Some(letter) if self.guessed.contains(letter) => ch,
                _ => MASK_PLACEHOLDER,
            })
            .collect()
    }

    /// Guessed letters that are not in the word, alphabetical
    pub fn wrong_letters(&self) -> LetterSet {
        self.guessed.difference(self.word_letters)
    }

    /// Status line for the current state
    pub fn status_message(&self) -> String {
        match (self.status, self.last_outcome) {
            (RoundStatus::Won, _) => MSG_WON.to_string(),
            (RoundStatus::Lost, _) => format!("{MSG_LOST_PREFIX}{}", self.word),
            (RoundStatus::Playing, Some(outcome)) => outcome.message().to_string(),
            (RoundStatus::Playing, None) => MSG_START.to_string(),
        }
    }

    /// Capture everything the renderer needs for one frame
    pub fn snapshot(&self) -> RoundSnapshot {
        let mut wrong = ArrayString::new();
        for letter in self.wrong_letters().iter() {
            wrong.push(letter.as_char());
        }
        RoundSnapshot {
            mask: self.masked_word(),
            wrong_letters: wrong,
            message: self.status_message(),
            lives: self.lives,
            max_lives: self.max_lives,
            status: self.status,
            round_id: self.round_id,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn word_letters(&self) -> LetterSet {
        self.word_letters
    }

    pub fn remaining(&self) -> LetterSet {
        self.remaining
    }

    pub fn guessed(&self) -> LetterSet {
        self.guessed
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn max_lives(&self) -> u8 {
        self.max_lives
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn last_outcome(&self) -> Option<GuessOutcome> {
        self.last_outcome
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }
}

/// Check that `word` is a non-empty run of ASCII letters.
pub fn validate_word(word: &str) -> Result<(), RoundError> {
    if word.is_empty() {
        return Err(RoundError::EmptyWord(word.to_string()));
    }
    if !word.chars().all(|ch| ch.is_ascii_alphabetic()) {
        if LetterSet::from_word(word).is_empty() {
            return Err(RoundError::EmptyWord(word.to_string()));
        }
        return Err(RoundError::InvalidWord(word.to_string()));
    }
    Ok(())
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
