use std::path::PathBuf;

use tui_hangman::core::{load_stages, GameState};
use tui_hangman::term::{GameView, TextGrid};
use tui_hangman::types::{Letter, Point, GRID_HEIGHT, GRID_WIDTH, MAX_LIVES};

fn asset(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets").join(name)
}

#[test]
fn bundled_stages_cover_every_life() {
    let stages = load_stages(asset("hangman_stages.lst")).unwrap();
    // One block per life from 0 to MAX_LIVES - 1, plus the blank stage.
    assert_eq!(stages.len(), MAX_LIVES as usize + 1);
    assert!(stages
        .for_lives(MAX_LIVES)
        .lines()
        .iter()
        .all(|l| l.trim().is_empty()));
    assert!(stages.for_lives(0).lines()[2].contains('O'));
}

#[test]
fn bundled_stages_fit_default_layout() {
    let stages = load_stages(asset("hangman_stages.lst")).unwrap();
    let grid = TextGrid::new(GRID_WIDTH, GRID_HEIGHT);
    let view = GameView::for_grid(&grid);
    view.validate(&grid, 12, &stages).unwrap();
}

#[test]
fn full_frame_has_fixed_shape() {
    let stages = load_stages(asset("hangman_stages.lst")).unwrap();
    let mut state = GameState::new();
    state.start_round("ORANGE").unwrap();
    state.guess(Letter::from_char('n').unwrap()).unwrap();
    state.guess(Letter::from_char('q').unwrap()).unwrap();

    let mut grid = TextGrid::new(GRID_WIDTH, GRID_HEIGHT);
    let view = GameView::for_grid(&grid);
    view.render_into(&state.snapshot(), stages.for_lives(state.lives()), &mut grid)
        .unwrap();

    let frame = grid.render();
    let rows: Vec<&str> = frame.split_terminator('\n').collect();
    assert_eq!(rows.len(), GRID_HEIGHT as usize);
    assert!(rows.iter().all(|r| r.len() == GRID_WIDTH as usize - 1));

    assert!(rows[0].starts_with("Wrong!"));
    assert!(rows[19].trim_end().ends_with("___N__"));
    assert_eq!(rows[21].trim(), "Q");
    // Ten lives left: only the base of the gallows.
    assert_eq!(rows[19][25..34].to_string(), "=========");
    assert_eq!(grid.cell(Point::new(27, 14)), Some(' '));
}

#[test]
fn hanged_frame_shows_full_figure() {
    let stages = load_stages(asset("hangman_stages.lst")).unwrap();
    let mut state = GameState::with_max_lives(1);
    state.start_round("CAT").unwrap();
    state.guess(Letter::from_char('z').unwrap()).unwrap();

    let mut grid = TextGrid::new(GRID_WIDTH, GRID_HEIGHT);
    let view = GameView::for_grid(&grid);
    view.render_into(&state.snapshot(), stages.for_lives(state.lives()), &mut grid)
        .unwrap();

    assert!(grid.render().starts_with("You lost... The word was CAT"));
    assert_eq!(grid.cell(Point::new(27, 14)), Some('O'));
}
