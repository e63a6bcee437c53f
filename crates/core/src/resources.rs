//! Word list and stage file loading.
//!
//! Parsing works on in-memory text; the `load_*` helpers add the file read.
//! Nothing here is lenient: a file that does not parse cleanly is an error
//! and the game refuses to start.

use std::fs;
use std::path::{Path, PathBuf};

use crate::stages::{Stage, StageSet};
use crate::types::STAGE_LINES;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{what} is malformed: {reason}")]
    Malformed { what: &'static str, reason: String },
    #[error("{what} is empty")]
    Empty { what: &'static str },
}

/// Split a word list on whitespace and upper-case every token.
pub fn parse_words(text: &str) -> Result<Vec<String>, LoadError> {
    let mut words = Vec::new();
    for (i, token) in text.split_whitespace().enumerate() {
        if !token.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return Err(LoadError::Malformed {
                what: "word list",
                reason: format!("word {} ({token:?}) contains a non-letter", i + 1),
            });
        }
        words.push(token.to_ascii_uppercase());
    }
    if words.is_empty() {
        return Err(LoadError::Empty { what: "word list" });
    }
    Ok(words)
}

/// Group lines into stages of `STAGE_LINES` lines each.
pub fn parse_stages(text: &str) -> Result<StageSet, LoadError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() % STAGE_LINES != 0 {
        return Err(LoadError::Malformed {
            what: "stage file",
            reason: format!(
                "{} lines is not a multiple of {STAGE_LINES}",
                lines.len()
            ),
        });
    }

    let stages = lines
        .chunks(STAGE_LINES)
        .filter_map(|block| Stage::new(block.iter().map(|l| l.to_string()).collect()))
        .collect();
    StageSet::new(stages).ok_or(LoadError::Empty { what: "stage file" })
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Missing {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_words(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let words = parse_words(&read(path)?)?;
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

pub fn load_stages(path: impl AsRef<Path>) -> Result<StageSet, LoadError> {
    let path = path.as_ref();
    let stages = parse_stages(&read(path)?)?;
    log::info!("loaded {} stages from {}", stages.len() - 1, path.display());
    Ok(stages)
}
