//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (round logic, grid rendering, console input).
//!
//! # Grid Dimensions
//!
//! The frame is a fixed character grid:
//!
//! - **Width**: 50 columns, the last column of each row holds the newline
//! - **Height**: 25 rows
//!
//! # Layout
//!
//! Fragment origins are derived from the grid size:
//!
//! | Fragment | Origin | Default |
//! |----------|--------|---------|
//! | Status message | `(0, 0)` | `(0, 0)` |
//! | Masked word | `(W - W/3, H - H/4)` | `(34, 19)` |
//! | Wrong letters | `(W - W/3, H - H/4 + 2)` | `(34, 21)` |
//! | Gallows stage | `(W/2, H/2)` | `(25, 12)` |
//!
//! # Rules
//!
//! - `MAX_LIVES`: 11 lives per round
//! - `STAGE_LINES`: every gallows stage is exactly 8 lines tall
//!
//! # Examples
//!
//! ```
//! use tui_hangman_types::{Letter, LetterSet, GRID_WIDTH, MAX_LIVES};
//!
//! let a = Letter::from_char('a').unwrap();
//! assert_eq!(a.as_char(), 'A');
//! assert!(Letter::from_char('7').is_none());
//!
//! let set = LetterSet::from_word("HELLO");
//! assert_eq!(set.len(), 4);
//! assert!(set.contains(Letter::from_char('L').unwrap()));
//!
//! assert_eq!(GRID_WIDTH, 50);
//! assert_eq!(MAX_LIVES, 11);
//! ```

use std::fmt;

/// Grid width in characters (50 columns including the newline column)
pub const GRID_WIDTH: u16 = 50;

/// Grid height in rows (25 rows)
pub const GRID_HEIGHT: u16 = 25;

/// Lives at the start of every round
pub const MAX_LIVES: u8 = 11;

/// Lines per gallows stage block
pub const STAGE_LINES: usize = 8;

/// Placeholder for unrevealed letters in the mask
pub const MASK_PLACEHOLDER: char = '_';

/// Number of letters in the guess alphabet
pub const ALPHABET_LEN: usize = 26;

/// Status line before the first guess of a round
pub const MSG_START: &str = "Game starts now!";

/// Status line after the last letter is revealed
pub const MSG_WON: &str = "You win!";

/// Status line after the last life is lost, followed by the word
pub const MSG_LOST_PREFIX: &str = "You lost... The word was ";

/// Status line after input that is not a letter
pub const MSG_INVALID: &str = "Please guess a letter!";


/// A single guessable letter, always upper-case ASCII `A..=Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Normalize a character into a letter
    ///
    /// Lower-case input is upper-cased. Anything outside the ASCII alphabet
    /// yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_hangman_types::Letter;
    ///
    /// assert_eq!(Letter::from_char('q').unwrap().as_char(), 'Q');
    /// assert_eq!(Letter::from_char('?'), None);
    /// ```
    pub fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Some(Letter(ch.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based position in the alphabet (`A` = 0)
    pub fn index(self) -> u8 {
        self.0 - b'A'
    }

    fn from_index(index: u8) -> Self {
        Letter(b'A' + index)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Set of letters backed by a 26-bit mask
///
/// Used for the letters of the current word, the still-unrevealed letters and
/// the guessed letters. Iteration is always alphabetical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet {
    bits: u32,
}

impl LetterSet {
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Collect the distinct letters of `word`, skipping anything that is not a letter
    pub fn from_word(word: &str) -> Self {
        let mut set = Self::new();
        for letter in word.chars().filter_map(Letter::from_char) {
            set.insert(letter);
        }
        set
    }

    /// Insert a letter, returning `true` if it was not yet present
    pub fn insert(&mut self, letter: Letter) -> bool {
        let bit = 1u32 << letter.index();
        let fresh = self.bits & bit == 0;
        self.bits |= bit;
        fresh
    }

    /// Remove a letter, returning `true` if it was present
    pub fn remove(&mut self, letter: Letter) -> bool {
        let bit = 1u32 << letter.index();
        let present = self.bits & bit != 0;
        self.bits &= !bit;
        present
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.bits & (1u32 << letter.index()) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Letters in `self` that are not in `other`
    pub fn difference(&self, other: LetterSet) -> LetterSet {
        LetterSet {
            bits: self.bits & !other.bits,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        (0..ALPHABET_LEN as u8)
            .filter(move |i| self.bits & (1u32 << i) != 0)
            .map(Letter::from_index)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

/// Grid coordinate (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// The point `dy` rows further down
    pub fn down(self, dy: u16) -> Self {
        Self {
            x: self.x,
            y: self.y.saturating_add(dy),
        }
    }
}

/// Round status
///
/// - **Playing**: guesses are accepted
/// - **Won**: every letter of the word has been revealed
/// - **Lost**: lives reached zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, RoundStatus::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundStatus::Playing => "playing",
            RoundStatus::Won => "won",
            RoundStatus::Lost => "lost",
        }
    }
}

/// What a single guess did, used to pick the status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessOutcome {
    /// The letter was guessed before this round (costs a life)
    AlreadyGuessed,
    /// The letter is in the word
    Correct,
    /// The letter is not in the word (costs a life)
    Wrong,
}

impl GuessOutcome {
    pub const ALL: [GuessOutcome; 3] = [
        GuessOutcome::AlreadyGuessed,
        GuessOutcome::Correct,
        GuessOutcome::Wrong,
    ];

    /// Status line shown after a guess that did not end the round
    pub fn message(&self) -> &'static str {
        match self {
            GuessOutcome::AlreadyGuessed => "You already guessed that letter!",
            GuessOutcome::Correct => "Right!",
            GuessOutcome::Wrong => "Wrong!",
        }
    }
}
