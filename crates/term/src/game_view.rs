//! GameView: maps a round snapshot into the text grid.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{RoundSnapshot, Stage, StageSet};
use crate::grid::{PlaceError, TextGrid};
use crate::types::{
    GuessOutcome, Point, ALPHABET_LEN, MSG_INVALID, MSG_LOST_PREFIX, MSG_START, MSG_WON,
};

/// A fragment that cannot be placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{fragment} does not fit the {width}x{height} grid: {source}")]
pub struct LayoutError {
    pub fragment: &'static str,
    pub width: u16,
    pub height: u16,
    #[source]
    pub source: PlaceError,
}

/// Fragment origins on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub status: Point,
    pub mask: Point,
    pub wrong_letters: Point,
    pub stage: Point,
}

impl Layout {
    /// Classic placement: status top-left, gallows from the centre, word and
    /// wrong letters in the lower-right third.
    pub fn for_grid(width: u16, height: u16) -> Self {
        let word_x = width - width / 3;
        let word_y = height - height / 4;
        Self {
            status: Point::new(0, 0),
            mask: Point::new(word_x, word_y),
            wrong_letters: Point::new(word_x, word_y.saturating_add(2)),
            stage: Point::new(width / 2, height / 2),
        }
    }
}

/// Composes one frame per turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    layout: Layout,
}

impl GameView {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn for_grid(grid: &TextGrid) -> Self {
        Self::new(Layout::for_grid(grid.width(), grid.height()))
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Check every fragment the game can ever draw against the grid.
    ///
    /// Run once at setup; after it passes, [`render_into`](Self::render_into)
    /// cannot fail for words no longer than `longest_word` and any stage in
    /// `stages`.
    pub fn validate(
        &self,
        grid: &TextGrid,
        longest_word: usize,
        stages: &StageSet,
    ) -> Result<(), LayoutError> {
        let longest_message = GuessOutcome::ALL
            .iter()
            .map(|o| o.message().len())
            .chain([
                MSG_START.len(),
                MSG_WON.len(),
                MSG_INVALID.len(),
                MSG_LOST_PREFIX.len() + longest_word,
            ])
            .max()
            .unwrap_or(0);

        let check = |fragment: &'static str, len: usize, origin: Point| {
            if grid.fits(len, origin) {
                Ok(())
            } else {
                Err(LayoutError {
                    fragment,
                    width: grid.width(),
                    height: grid.height(),
                    source: PlaceError {
                        origin,
                        len,
                        capacity: grid.capacity(),
                    },
                })
            }
        };

        check("status message", longest_message, self.layout.status)?;
        check("masked word", longest_word, self.layout.mask)?;
        check("wrong letters", ALPHABET_LEN, self.layout.wrong_letters)?;
        for stage in stages.iter() {
            for (dy, line) in stage.lines().iter().enumerate() {
                check("gallows stage", line.chars().count(), self.layout.stage.down(dy as u16))?;
            }
        }
        Ok(())
    }

    /// Clear the grid and draw the snapshot with `stage` layered on top.
    pub fn render_into(
        &self,
        snap: &RoundSnapshot,
        stage: &Stage,
        grid: &mut TextGrid,
    ) -> Result<(), PlaceError> {
        grid.clear();
        grid.place(&snap.message, self.layout.status)?;
        grid.place(&snap.mask, self.layout.mask)?;
        grid.place(&snap.wrong_letters, self.layout.wrong_letters)?;

        let mut origin = self.layout.stage;
        for line in stage.lines() {
            grid.place(line, origin)?;
            origin = origin.down(1);
        }
        Ok(())
    }

    /// Convenience helper that allocates a new grid.
    pub fn render(
        &self,
        snap: &RoundSnapshot,
        stage: &Stage,
        width: u16,
        height: u16,
    ) -> Result<TextGrid, PlaceError> {
        let mut grid = TextGrid::new(width, height);
        self.render_into(snap, stage, &mut grid)?;
        Ok(grid)
    }
}
