//! Terminal hangman runner (default binary).
//!
//! Loads the word list and gallows stages, then hands the console to the
//! controller. Frames go to stdout; logs go to stderr (`RUST_LOG`, default
//! `warn`).

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use tui_hangman::config::Args;
use tui_hangman::core::{load_stages, load_words, SimpleRng};
use tui_hangman::engine::{Controller, Exit, GameConfig};
use tui_hangman::input::TokenReader;
use tui_hangman::term::TerminalRenderer;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(exit) => {
            info!("session ended: {exit:?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            eprintln!("tui-hangman: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<Exit> {
    let words = load_words(&args.words).context("loading word list")?;
    let stages = load_stages(&args.stages).context("loading gallows stages")?;

    let seed = args.resolve_seed();
    info!("shuffle seed {seed}");

    let mut controller = Controller::new(
        words,
        stages,
        Box::new(SimpleRng::new(seed)),
        GameConfig::default(),
    )
    .context("setting up the game")?;

    let mut input = TokenReader::stdin();
    let mut screen = TerminalRenderer::new();
    controller.run(&mut input, &mut screen)
}
