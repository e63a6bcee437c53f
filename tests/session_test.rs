//! Whole sessions driven through the real reader and renderer

use std::io::Write;

use tui_hangman::core::{parse_stages, IdentityShuffle, LoadError, Stage, StageSet};
use tui_hangman::engine::{Controller, Exit, GameConfig, Phase};
use tui_hangman::input::TokenReader;
use tui_hangman::term::TerminalRenderer;
use tui_hangman::types::{RoundStatus, STAGE_LINES};

fn stages() -> StageSet {
    StageSet::new(vec![Stage::new(vec!["|".to_string(); STAGE_LINES]).unwrap()]).unwrap()
}

fn controller(words: &[&str]) -> Controller {
    Controller::new(
        words.iter().map(|w| w.to_string()).collect(),
        stages(),
        Box::new(IdentityShuffle),
        GameConfig::default(),
    )
    .unwrap()
}

#[test]
fn win_then_decline() {
    let mut c = controller(&["CAT"]);
    let mut input = TokenReader::new("c\na t\nn\n".as_bytes());
    let mut term = TerminalRenderer::with_writer(Vec::new());

    let exit = c.run(&mut input, &mut term).unwrap();
    assert_eq!(exit, Exit::Declined);
    assert_eq!(c.state().status(), RoundStatus::Won);

    let out = String::from_utf8(term.into_inner()).unwrap();
    assert!(out.contains("You win!"));
    assert!(out.contains("What's your guess?: "));
    assert!(out.ends_with("Again? (Y/N) "));
}

#[test]
fn garbage_input_reprompts_without_cost() {
    let mut c = controller(&["CAT"]);
    let mut input = TokenReader::new("1 % 42\n".as_bytes());
    let mut term = TerminalRenderer::with_writer(Vec::new());

    assert_eq!(c.run(&mut input, &mut term).unwrap(), Exit::EndOfInput);
    assert_eq!(c.state().lives(), c.state().max_lives());
    assert!(c.state().guessed().is_empty());

    let out = String::from_utf8(term.into_inner()).unwrap();
    assert_eq!(out.matches("What's your guess?: ").count(), 4);
    assert!(out.contains("Please guess a letter!"));
}

#[test]
fn replay_draws_past_the_end_of_the_pool() {
    let mut c = controller(&["A", "B"]);
    // Win A, replay, win B, replay (reshuffle), win A, quit.
    let mut input = TokenReader::new("a y b y a n".as_bytes());
    let mut term = TerminalRenderer::with_writer(Vec::new());

    assert_eq!(c.run(&mut input, &mut term).unwrap(), Exit::Declined);
    assert_eq!(c.state().word(), "A");
    assert_eq!(c.pool().cycles(), 2);
    assert_eq!(c.phase(), Phase::Terminal);
}

#[test]
fn loss_reveals_word() {
    let config = GameConfig {
        max_lives: 3,
        ..GameConfig::default()
    };
    let mut c = Controller::new(
        vec!["RUST".to_string()],
        stages(),
        Box::new(IdentityShuffle),
        config,
    )
    .unwrap();
    let mut input = TokenReader::new("x y z\nq\n".as_bytes());
    let mut term = TerminalRenderer::with_writer(Vec::new());

    assert_eq!(c.run(&mut input, &mut term).unwrap(), Exit::Declined);
    let out = String::from_utf8(term.into_inner()).unwrap();
    assert!(out.contains("You lost... The word was RUST"));
}

#[test]
fn malformed_stage_file_stops_setup() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for i in 0..STAGE_LINES + 3 {
        writeln!(file, "line {i}").unwrap();
    }
    let err = tui_hangman::core::load_stages(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Malformed { .. }));

    assert!(matches!(parse_stages(""), Err(LoadError::Empty { .. })));
}

#[test]
fn missing_word_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = tui_hangman::core::load_words(dir.path().join("words.lst")).unwrap_err();
    assert!(matches!(err, LoadError::Missing { .. }));
}
