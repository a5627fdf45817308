use std::cmp::Ordering;
use std::num::IntErrorKind;

use rand::Rng;
use tracing::{debug, info, trace};

use crate::core::difficulty::Difficulty;
use crate::core::error::GuessError;

/// Which way the player should move their next guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Higher,
    Lower,
}

/// Result of a guess that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Correct guess. `attempts` counts every guess of the round, this one included.
    Win { attempts: u32 },
    /// Last life spent; reveals the secret number.
    Lose { target: u32 },
    /// Wrong guess with lives to spare.
    Hint {
        direction: Direction,
        lives_remaining: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// One play-through, from target selection to win or loss.
///
/// Pure logic: no I/O, no knowledge of scores. Every change of difficulty or
/// restart replaces the whole value.
#[derive(Debug, Clone)]
pub struct Round {
    difficulty: Difficulty,
    target: u32,
    lives_remaining: u32,
    max_lives: u32,
    status: RoundStatus,
}

impl Round {
    /// Starts a round with a target drawn from the thread-local RNG.
    pub fn start(difficulty: Difficulty) -> Self {
        Self::start_with(difficulty, &mut rand::rng())
    }

    /// Starts a round with a target drawn from `rng`.
    pub fn start_with<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Self {
        let target = rng.random_range(1..=difficulty.max_number());
        let round = Self::fresh(difficulty, target);
        info!(
            difficulty = %difficulty,
            max_number = difficulty.max_number(),
            max_lives = round.max_lives,
            "new round started"
        );
        trace!(secret = target, "secret number drawn");
        round
    }

    /// Starts a round with a fixed target. Returns `None` if `target` is
    /// outside `1..=max_number`.
    pub fn with_target(difficulty: Difficulty, target: u32) -> Option<Self> {
        (1..=difficulty.max_number())
            .contains(&target)
            .then(|| Self::fresh(difficulty, target))
    }

    fn fresh(difficulty: Difficulty, target: u32) -> Self {
        let max_lives = difficulty.max_lives();
        Self {
            difficulty,
            target,
            lives_remaining: max_lives,
            max_lives,
            status: RoundStatus::InProgress,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn max_number(&self) -> u32 {
        self.difficulty.max_number()
    }

    pub fn lives_remaining(&self) -> u32 {
        self.lives_remaining
    }

    pub fn max_lives(&self) -> u32 {
        self.max_lives
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status != RoundStatus::InProgress
    }

    /// Guesses submitted so far that passed validation.
    pub fn attempts_made(&self) -> u32 {
        let spent = self.max_lives - self.lives_remaining;
        match self.status {
            RoundStatus::Won => spent + 1,
            _ => spent,
        }
    }

    /// Evaluates raw guess text against the secret number.
    ///
    /// Rejected input (`RoundOver`, `NotANumber`, `OutOfRange`) leaves the
    /// round untouched and costs no life.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        if self.is_finished() {
            return Err(GuessError::RoundOver);
        }

        let guess = self.parse_guess(raw)?;

        let outcome = match guess.cmp(&self.target) {
            Ordering::Equal => {
                let attempts = self.max_lives - self.lives_remaining + 1;
                self.status = RoundStatus::Won;
                info!(attempts, "round won");
                GuessOutcome::Win { attempts }
            }
            ordering => {
                self.lives_remaining = self.lives_remaining.saturating_sub(1);
                if self.lives_remaining == 0 {
                    self.status = RoundStatus::Lost;
                    info!(secret = self.target, "round lost");
                    GuessOutcome::Lose { target: self.target }
                } else {
                    let direction = match ordering {
                        Ordering::Less => Direction::Higher,
                        _ => Direction::Lower,
                    };
                    GuessOutcome::Hint {
                        direction,
                        lives_remaining: self.lives_remaining,
                    }
                }
            }
        };

        debug!(guess, ?outcome, "guess evaluated");
        Ok(outcome)
    }

    fn parse_guess(&self, raw: &str) -> Result<u32, GuessError> {
        let text = raw.trim();
        let max = self.max_number();

        let value = match text.parse::<i64>() {
            Ok(value) => value,
            // Still an integer, just an enormous one.
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                let value = if text.starts_with('-') { i64::MIN } else { i64::MAX };
                return Err(GuessError::OutOfRange { value, max });
            }
            Err(_) => {
                return Err(GuessError::NotANumber {
                    input: text.to_string(),
                })
            }
        };

        if value < 1 || value > i64::from(max) {
            return Err(GuessError::OutOfRange { value, max });
        }
        // Bounded by `max` above.
        Ok(value as u32)
    }
}
