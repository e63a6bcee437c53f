//! Gallows art stages.
//!
//! A stage is a block of exactly [`STAGE_LINES`] lines. The set keeps the
//! blocks in file order and appends one blank block; the stage shown for a
//! lives count is the block at that index, clamped to the last block.

use crate::types::STAGE_LINES;

/// One block of ASCII art.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    lines: Vec<String>,
}

impl Stage {
    /// Build a stage from exactly `STAGE_LINES` lines.
    pub fn new(lines: Vec<String>) -> Option<Self> {
        (lines.len() == STAGE_LINES).then_some(Self { lines })
    }

    /// Eight single-space lines.
    pub fn blank() -> Self {
        Self {
            lines: vec![" ".to_string(); STAGE_LINES],
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Width of the widest line in bytes.
    pub fn width(&self) -> usize {
        self.lines.iter().map(String::len).max().unwrap_or(0)
    }
}

/// Ordered, immutable stage list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSet {
    stages: Vec<Stage>,
}

impl StageSet {
    /// Wrap loaded stages and append the blank stage.
    ///
    /// Returns `None` when `stages` is empty.
    pub fn new(mut stages: Vec<Stage>) -> Option<Self> {
        if stages.is_empty() {
            return None;
        }
        stages.push(Stage::blank());
        Some(Self { stages })
    }

    /// Stage for the given lives count.
    pub fn for_lives(&self, lives: u8) -> &Stage {
        let idx = (lives as usize).min(self.stages.len() - 1);
        &self.stages[idx]
    }

    /// Number of stages, the appended blank one included.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter()
    }

    /// Width of the widest line across all stages.
    pub fn max_width(&self) -> usize {
        self.stages.iter().map(Stage::width).max().unwrap_or(0)
    }
}
