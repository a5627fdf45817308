use numterm::{Difficulty, Direction, GuessError, GuessOutcome, Round, RoundStatus};

#[test]
fn medium_round_hint_then_parse_error_then_win() {
    let mut round = Round::with_target(Difficulty::Medium, 42).expect("42 is in range");

    assert_eq!(
        round.submit_guess("50"),
        Ok(GuessOutcome::Hint {
            direction: Direction::Lower,
            lives_remaining: 6
        })
    );

    assert_eq!(
        round.submit_guess("abc"),
        Err(GuessError::NotANumber { input: "abc".into() })
    );
    assert_eq!(round.lives_remaining(), 6);

    assert_eq!(round.submit_guess("42"), Ok(GuessOutcome::Win { attempts: 2 }));
    assert_eq!(round.status(), RoundStatus::Won);
}

#[test]
fn easy_round_runs_out_of_lives() {
    let mut round = Round::with_target(Difficulty::Easy, 10).expect("10 is in range");
    assert_eq!(round.max_lives(), 10);

    for guess in 1..=9 {
        let before = round.lives_remaining();
        let outcome = round.submit_guess(&guess.to_string()).unwrap();
        assert_eq!(
            outcome,
            GuessOutcome::Hint {
                direction: Direction::Higher,
                lives_remaining: before - 1
            }
        );
    }
    assert_eq!(round.lives_remaining(), 1);

    assert_eq!(round.submit_guess("50"), Ok(GuessOutcome::Lose { target: 10 }));
    assert_eq!(round.lives_remaining(), 0);
    assert!(round.is_finished());
    assert_eq!(round.status(), RoundStatus::Lost);

    // Even the right answer is refused now.
    assert_eq!(round.submit_guess("10"), Err(GuessError::RoundOver));
    assert_eq!(round.lives_remaining(), 0);
}

#[test]
fn rejected_guesses_never_change_state() {
    for difficulty in Difficulty::ALL {
        let mut round = Round::with_target(difficulty, 1).unwrap();
        // Spend a life so the check covers a non-initial state too.
        round.submit_guess("2").unwrap();
        let lives = round.lives_remaining();

        let too_big = (difficulty.max_number() + 1).to_string();
        for raw in ["", "  ", "abc", "1e3", "0x10", "12abc", "0", "-1", too_big.as_str()] {
            assert!(round.submit_guess(raw).is_err(), "{raw:?} should be rejected");
            assert_eq!(round.lives_remaining(), lives);
            assert!(!round.is_finished());
        }
    }
}

#[test]
fn wrong_guesses_cost_exactly_one_life() {
    let mut round = Round::with_target(Difficulty::Hard, 200).unwrap();
    let mut expected = round.max_lives();
    while !round.is_finished() {
        round.submit_guess("199").unwrap();
        expected -= 1;
        assert_eq!(round.lives_remaining(), expected);
    }
    assert_eq!(round.lives_remaining(), 0);
}

#[test]
fn random_rounds_start_in_range() {
    for difficulty in Difficulty::ALL {
        for _ in 0..200 {
            let mut round = Round::start(difficulty);
            assert_eq!(round.lives_remaining(), difficulty.max_lives());
            // Out-of-range guesses are refused whatever the target is.
            let above = (difficulty.max_number() + 1).to_string();
            assert!(matches!(
                round.submit_guess(&above),
                Err(GuessError::OutOfRange { .. })
            ));
        }
    }
}
