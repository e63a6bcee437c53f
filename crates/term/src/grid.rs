//! Fixed-size character grid.
//!
//! The grid is a single row-major buffer of `width * height` ASCII cells. The
//! last cell of every row holds a newline, so reading the buffer linearly
//! yields a printable rectangular block.

use crate::types::Point;

/// Placement that would run past the end of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{len} cells at ({}, {}) exceed the {capacity}-cell grid", .origin.x, .origin.y)]
pub struct PlaceError {
    pub origin: Point,
    pub len: usize,
    pub capacity: usize,
}

/// Character frame buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGrid {
    width: u16,
    height: u16,
    cells: Vec<u8>,
}

impl TextGrid {
    /// Create a cleared grid. A zero width is bumped to one column.
    pub fn new(width: u16, height: u16) -> Self {
        let width = width.max(1);
        let len = (width as usize) * (height as usize);
        let mut grid = Self {
            width,
            height,
            cells: vec![b' '; len],
        };
        grid.clear();
        grid
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Reset every cell to a space, with a newline closing every row.
    pub fn clear(&mut self) {
        let w = self.width as usize;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = if (i + 1) % w == 0 { b'\n' } else { b' ' };
        }
    }

    #[inline(always)]
    fn offset(&self, origin: Point) -> usize {
        (origin.x as usize) + (origin.y as usize) * (self.width as usize)
    }

    /// Whether `len` cells starting at `origin` stay inside the buffer.
    pub fn fits(&self, len: usize, origin: Point) -> bool {
        self.offset(origin)
            .checked_add(len)
            .is_some_and(|end| end <= self.cells.len())
    }

    /// Copy `text` into the buffer starting at the linear offset of `origin`.
    ///
    /// The span may cross row boundaries and overwrites whatever it covers,
    /// newline markers included. Each character takes one cell; characters
    /// outside ASCII are written as `?`. Nothing is written if the span does
    /// not fit.
    pub fn place(&mut self, text: &str, origin: Point) -> Result<(), PlaceError> {
        let len = text.chars().count();
        if !self.fits(len, origin) {
            return Err(PlaceError {
                origin,
                len,
                capacity: self.cells.len(),
            });
        }

        let start = self.offset(origin);
        for (cell, ch) in self.cells[start..start + len].iter_mut().zip(text.chars()) {
            *cell = if ch.is_ascii() { ch as u8 } else { b'?' };
        }
        Ok(())
    }

    /// The whole frame as text.
    pub fn render(&self) -> &str {
        // `place` only ever writes ASCII, so this never falls back.
        std::str::from_utf8(&self.cells).unwrap_or_default()
    }

    /// Raw frame bytes, always ASCII.
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    pub fn cell(&self, point: Point) -> Option<char> {
        if point.x >= self.width || point.y >= self.height {
            return None;
        }
        self.cells.get(self.offset(point)).map(|&b| b as char)
    }

    /// Row `y` including its trailing newline cell.
    pub fn row(&self, y: u16) -> Option<&str> {
        if y >= self.height {
            return None;
        }
        let start = self.offset(Point::new(0, y));
        std::str::from_utf8(&self.cells[start..start + self.width as usize]).ok()
    }
}
