//! TerminalRenderer: flushes a text grid to a real terminal.
//!
//! Every frame is a full redraw: clear the screen, home the cursor, write the
//! grid. There is no diffing and no second buffer; the terminal stays in
//! cooked mode so the console can read whole lines between frames.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, terminal, QueueableCommand};

use crate::grid::TextGrid;

/// Where frames and prompts go.
pub trait Screen {
    /// Replace whatever is on screen with `grid`.
    fn show(&mut self, grid: &TextGrid) -> Result<()>;

    /// Print a prompt on its own line below the frame.
    fn prompt(&mut self, text: &str) -> Result<()>;
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Screen for TerminalRenderer<W> {
    fn show(&mut self, grid: &TextGrid) -> Result<()> {
        self.buf.clear();
        encode_frame_into(grid, &mut self.buf)?;
        self.flush_buf()
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.push(b'\n');
        self.buf.extend_from_slice(text.as_bytes());
        self.flush_buf()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds the byte stream without writing to stdout.
pub fn encode_frame_into(grid: &TextGrid, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.extend_from_slice(grid.as_bytes());
    Ok(())
}
