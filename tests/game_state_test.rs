//! Round rules exercised through the public facade

use tui_hangman::core::{GameState, SimpleRng};
use tui_hangman::types::{GuessOutcome, Letter, LetterSet, RoundStatus, MAX_LIVES};

fn letter(ch: char) -> Letter {
    Letter::from_char(ch).unwrap()
}

/// Random guess sequences drawn from the whole alphabet.
fn random_guesses(rng: &mut SimpleRng, len: usize) -> Vec<Letter> {
    (0..len)
        .map(|_| letter((b'A' + rng.next_range(26) as u8) as char))
        .collect()
}

#[test]
fn test_cat_scenario() {
    let mut state = GameState::new();
    state.start_round("CAT").unwrap();

    state.guess(letter('C')).unwrap();
    assert_eq!(state.masked_word(), "C__");
    assert_eq!(state.status(), RoundStatus::Playing);

    state.guess(letter('A')).unwrap();
    assert_eq!(state.masked_word(), "CA_");

    state.guess(letter('T')).unwrap();
    assert_eq!(state.masked_word(), "CAT");
    assert_eq!(state.status(), RoundStatus::Won);
    assert_eq!(state.lives(), MAX_LIVES);
}

#[test]
fn test_dog_scenario() {
    let mut state = GameState::with_max_lives(2);
    state.start_round("DOG").unwrap();

    let first = state.guess(letter('X')).unwrap();
    assert_eq!(first.outcome, GuessOutcome::Wrong);
    assert_eq!(state.lives(), 1);

    let second = state.guess(letter('X')).unwrap();
    assert_eq!(second.outcome, GuessOutcome::AlreadyGuessed);
    assert_eq!(state.lives(), 0);
    assert_eq!(second.status, RoundStatus::Lost);
}

#[test]
fn test_lives_monotonic_for_random_sequences() {
    let mut rng = SimpleRng::new(2024);
    for word in ["RUST", "BORROW", "LIFETIME", "Q", "MISSISSIPPI"] {
        for _ in 0..50 {
            let mut state = GameState::new();
            state.start_round(word).unwrap();
            let mut prev = state.lives();
            for guess in random_guesses(&mut rng, 40) {
                if state.status().is_over() {
                    break;
                }
                state.guess(guess).unwrap();
                assert!(state.lives() <= prev);
                assert!(state.lives() <= MAX_LIVES);
                prev = state.lives();
            }
            if state.lives() == 0 {
                assert_eq!(state.status(), RoundStatus::Lost);
            }
        }
    }
}

#[test]
fn test_all_letters_in_any_order_wins_without_losing_lives() {
    let mut rng = SimpleRng::new(7);
    for word in ["HANGMAN", "ZEBRA", "ABCDEFGHIJKLM"] {
        let mut letters: Vec<Letter> = LetterSet::from_word(word).iter().collect();
        for _ in 0..10 {
            rng.shuffle(&mut letters);
            let mut state = GameState::new();
            state.start_round(word).unwrap();
            for &l in &letters {
                state.guess(l).unwrap();
            }
            assert_eq!(state.status(), RoundStatus::Won);
            assert_eq!(state.lives(), MAX_LIVES);
            assert_eq!(state.masked_word(), word);
        }
    }
}

#[test]
fn test_wrong_guess_is_reported_separately_from_mask() {
    let mut state = GameState::new();
    state.start_round("PUZZLE").unwrap();
    let before = state.lives();

    state.guess(letter('K')).unwrap();
    assert_eq!(state.lives(), before - 1);
    assert!(state.wrong_letters().contains(letter('K')));
    assert_eq!(state.masked_word(), "______");
}

#[test]
fn test_repeat_does_not_touch_mask_or_remaining() {
    let mut state = GameState::new();
    state.start_round("PUZZLE").unwrap();
    state.guess(letter('Z')).unwrap();
    let mask = state.masked_word();
    let remaining = state.remaining();
    let lives = state.lives();

    state.guess(letter('Z')).unwrap();
    assert_eq!(state.lives(), lives - 1);
    assert_eq!(state.masked_word(), mask);
    assert_eq!(state.remaining(), remaining);
}

#[test]
fn test_mask_rederivation_is_stable() {
    let mut rng = SimpleRng::new(99);
    let mut state = GameState::new();
    state.start_round("CONCURRENCY").unwrap();
    for guess in random_guesses(&mut rng, 8) {
        if state.status().is_over() {
            break;
        }
        state.guess(guess).unwrap();
        assert_eq!(state.masked_word(), state.masked_word());
        assert_eq!(state.snapshot().mask, state.masked_word());
    }
}
