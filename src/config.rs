//! Command-line configuration.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

/// Terminal hangman.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tui-hangman", version, about = "Guess the word before the gallows is complete")]
pub struct Args {
    /// Word list: whitespace-separated words, one per token.
    #[arg(long, default_value = "assets/words.lst")]
    pub words: PathBuf,
    /// Gallows art: blocks of exactly 8 lines, fully hanged first.
    #[arg(long, default_value = "assets/hangman_stages.lst")]
    pub stages: PathBuf,
    /// Seed for the word shuffle (default: derived from the clock).
    #[arg(long)]
    pub seed: Option<u32>,
}

impl Args {
    /// The configured seed, or one taken from the clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}
