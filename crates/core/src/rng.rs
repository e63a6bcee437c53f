//! RNG module - shuffled word pool
//!
//! Words are drawn from a shuffled pool until it is exhausted, then the pool is
//! reshuffled and drawing starts over. Every word appears exactly once per cycle,
//! so the game never runs out of words and the order is not predictable.
//!
//! The shuffle source is injected through [`Shuffle`], which lets tests use a
//! deterministic ordering.

/// Permutes the word pool in place
pub trait Shuffle {
    fn shuffle_words(&mut self, words: &mut [String]);
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current RNG state (feeding it back into `new` replays the sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Shuffle for SimpleRng {
    fn shuffle_words(&mut self, words: &mut [String]) {
        self.shuffle(words);
    }
}

/// Leaves the pool in load order
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityShuffle;

impl Shuffle for IdentityShuffle {
    fn shuffle_words(&mut self, _words: &mut [String]) {}
}

/// Shuffled words plus a cursor into them
pub struct WordPool {
    words: Vec<String>,
    /// Index of the next word to draw
    guess_index: usize,
    /// Completed shuffles, the initial one included
    cycles: u32,
    shuffle: Box<dyn Shuffle>,
}

impl WordPool {
    /// Build a pool and shuffle it once
    ///
    /// Returns `None` when `words` is empty.
    pub fn new(words: Vec<String>, shuffle: Box<dyn Shuffle>) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        let mut pool = Self {
            words,
            guess_index: 0,
            cycles: 0,
            shuffle,
        };
        pool.reshuffle();
        Some(pool)
    }

    fn reshuffle(&mut self) {
        self.shuffle.shuffle_words(&mut self.words);
        self.guess_index = 0;
        self.cycles = self.cycles.wrapping_add(1);
        log::debug!("word pool shuffled ({} words)", self.words.len());
    }

    /// Draw the next word, reshuffling first if the pool is exhausted
    pub fn next_word(&mut self) -> &str {
        if self.guess_index >= self.words.len() {
            self.reshuffle();
        }
        let idx = self.guess_index;
        self.guess_index += 1;
        &self.words[idx]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words left before the next reshuffle
    pub fn remaining(&self) -> usize {
        self.words.len() - self.guess_index
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl std::fmt::Debug for WordPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordPool")
            .field("len", &self.words.len())
            .field("guess_index", &self.guess_index)
            .field("cycles", &self.cycles)
            .finish()
    }
}
