//! Controller - drives rounds from setup to quit.
//!
//! The controller owns the round state, the word pool, the stages and the
//! grid. Each turn it composes a frame, shows it, reads one character and
//! feeds it to the round. Win and loss are evaluated right after every guess,
//! before the next frame is drawn.

use anyhow::Result;

use crate::core::{
    validate_word, GameState, GuessResult, RoundError, Shuffle, StageSet, WordPool,
};
use crate::input::{is_replay, map_guess, InputError, InputSource};
use crate::term::{GameView, LayoutError, PlaceError, Screen, TextGrid};
use crate::types::{RoundStatus, GRID_HEIGHT, GRID_WIDTH, MAX_LIVES, MSG_INVALID};

pub const GUESS_PROMPT: &str = "What's your guess?: ";
pub const REPLAY_PROMPT: &str = "Again? (Y/N) ";

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("the word pool is empty")]
    EmptyWordPool,
    #[error(transparent)]
    Round(#[from] RoundError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Grid size and lives per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub max_lives: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            max_lives: MAX_LIVES,
        }
    }
}

/// Where the controller is between turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// Round finished, waiting for the replay answer.
    RoundOver(RoundStatus),
    Terminal,
}

/// Why [`Controller::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The player answered anything but yes to the replay prompt.
    Declined,
    /// Input ran out.
    EndOfInput,
}

/// Effect of one typed character while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Not a letter; nothing changed.
    Ignored(InputError),
    Guessed(GuessResult),
}

pub struct Controller {
    state: GameState,
    pool: WordPool,
    stages: StageSet,
    grid: TextGrid,
    view: GameView,
    phase: Phase,
    /// One-shot status line overriding the round's own message.
    notice: Option<&'static str>,
}

impl Controller {
    /// Validate the data and layout, shuffle the pool and start the first round.
    pub fn new(
        words: Vec<String>,
        stages: StageSet,
        shuffle: Box<dyn Shuffle>,
        config: GameConfig,
    ) -> Result<Self, SetupError> {
        if config.max_lives == 0 {
            return Err(RoundError::NoLives.into());
        }
        for word in &words {
            validate_word(word)?;
        }
        let longest_word = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
        let mut pool = WordPool::new(words, shuffle).ok_or(SetupError::EmptyWordPool)?;

        let grid = TextGrid::new(config.width, config.height);
        let view = GameView::for_grid(&grid);
        view.validate(&grid, longest_word, &stages)?;

        let mut state = GameState::with_max_lives(config.max_lives);
        state.start_round(pool.next_word())?;
        log::info!(
            "game ready: {} words, {} stages, {}x{} grid",
            pool.len(),
            stages.len(),
            grid.width(),
            grid.height()
        );

        Ok(Self {
            state,
            pool,
            stages,
            grid,
            view,
            phase: Phase::Playing,
            notice: None,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    /// Compose the frame for the current state into the grid.
    ///
    /// The stage is picked by the current lives count.
    pub fn compose(&mut self) -> Result<&TextGrid, PlaceError> {
        let mut snap = self.state.snapshot();
        if let Some(notice) = self.notice.take() {
            snap.message = notice.to_string();
        }
        let stage = self.stages.for_lives(self.state.lives());
        self.view.render_into(&snap, stage, &mut self.grid)?;
        Ok(&self.grid)
    }

    /// Feed one typed character to the round.
    ///
    /// Characters that are not letters are ignored without touching the
    /// round. Calling this outside [`Phase::Playing`] is a caller error.
    pub fn tick_guess(&mut self, ch: char) -> Result<Turn, RoundError> {
        if let Phase::RoundOver(status) = self.phase {
            return Err(RoundError::RoundOver(status));
        }

        let letter = match map_guess(ch) {
            Ok(letter) => letter,
            Err(err) => {
                log::debug!("ignoring input: {err}");
                self.notice = Some(MSG_INVALID);
                return Ok(Turn::Ignored(err));
            }
        };

        let result = self.state.guess(letter)?;
        log::debug!(
            "guess {letter}: {:?}, {} lives left",
            result.outcome,
            self.state.lives()
        );
        if result.status.is_over() {
            log::info!(
                "round {} {} ({})",
                self.state.round_id(),
                result.status.as_str(),
                self.state.word()
            );
            self.phase = Phase::RoundOver(result.status);
        }
        Ok(Turn::Guessed(result))
    }

    /// Answer the replay prompt. Returns whether a new round started.
    pub fn answer_replay(&mut self, ch: char) -> Result<bool, RoundError> {
        if is_replay(ch) {
            self.restart()?;
            Ok(true)
        } else {
            self.phase = Phase::Terminal;
            Ok(false)
        }
    }

    /// Start the next round with the next word from the pool.
    pub fn restart(&mut self) -> Result<(), RoundError> {
        self.state.start_round(self.pool.next_word())?;
        self.notice = None;
        self.phase = Phase::Playing;
        Ok(())
    }

    /// Play until the player quits or input ends.
    pub fn run<I: InputSource, S: Screen>(&mut self, input: &mut I, screen: &mut S) -> Result<Exit> {
        loop {
            let replay = match self.phase {
                Phase::Playing => false,
                Phase::RoundOver(_) => true,
                Phase::Terminal => return Ok(Exit::Declined),
            };

            let grid = self.compose()?;
            screen.show(grid)?;
            screen.prompt(if replay { REPLAY_PROMPT } else { GUESS_PROMPT })?;

            let Some(ch) = input.next_char()? else {
                self.phase = Phase::Terminal;
                return Ok(Exit::EndOfInput);
            };

            if !replay {
                self.tick_guess(ch)?;
            } else if !self.answer_replay(ch)? {
                return Ok(Exit::Declined);
            }
        }
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("phase", &self.phase)
            .field("state", &self.state)
            .field("pool", &self.pool)
            .finish()
    }
}
