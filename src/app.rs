//! Interactive session: the owned value a front end drives.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::core::difficulty::Difficulty;
use crate::core::error::GuessError;
use crate::core::round::{GuessOutcome, Round};
use crate::core::score::{FileBackend, ScoreBackend, ScoreStore};

/// What the front end should show after the last action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Fresh round, nothing guessed yet.
    Welcome,
    Outcome {
        outcome: GuessOutcome,
        new_best: bool,
    },
    Rejected(GuessError),
}

/// Whether the driving loop should keep going after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App<B = FileBackend> {
    round: Round,
    scores: ScoreStore<B>,
    best: Option<u32>,
    input: String,
    feedback: Feedback,
}

impl<B: ScoreBackend> App<B> {
    /// Loads the best score and starts the first round.
    pub fn new(difficulty: Difficulty, scores: ScoreStore<B>) -> Self {
        let best = scores.load();
        debug!(?best, "session started");
        Self {
            round: Round::start(difficulty),
            scores,
            best,
            input: String::new(),
            feedback: Feedback::Welcome,
        }
    }

    /// Resumes play with an already prepared round.
    pub fn with_round(round: Round, scores: ScoreStore<B>) -> Self {
        let best = scores.load();
        Self {
            round,
            scores,
            best,
            input: String::new(),
            feedback: Feedback::Welcome,
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn best(&self) -> Option<u32> {
        self.best
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn scores(&self) -> &ScoreStore<B> {
        &self.scores
    }

    /// Starts a new round at `difficulty`, even if it is the current one.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.round = Round::start(difficulty);
        self.input.clear();
        self.feedback = Feedback::Welcome;
    }

    pub fn restart(&mut self) {
        self.set_difficulty(self.round.difficulty());
    }

    /// Submits `raw` as a guess and records a winning score.
    pub fn submit(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        self.input.clear();
        match self.round.submit_guess(raw) {
            Ok(outcome) => {
                let mut new_best = false;
                if let GuessOutcome::Win { attempts } = outcome {
                    let (best, updated) = self.scores.record_if_better(attempts, self.best);
                    self.best = Some(best);
                    new_best = updated;
                }
                self.feedback = Feedback::Outcome { outcome, new_best };
                Ok(outcome)
            }
            Err(e) => {
                self.feedback = Feedback::Rejected(e.clone());
                Err(e)
            }
        }
    }

    /// Keyboard mapping for the terminal UI.
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Char('c') if ctrl => return Control::Quit,
            KeyCode::Char('n') if ctrl => self.restart(),
            KeyCode::Tab => self.set_difficulty(self.round.difficulty().next()),
            KeyCode::BackTab => self.set_difficulty(self.round.difficulty().previous()),
            KeyCode::Enter if self.round.is_finished() => self.restart(),
            KeyCode::Enter => {
                let raw = std::mem::take(&mut self.input);
                // Rejections are kept in `feedback` for display.
                let _ = self.submit(&raw);
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !ctrl && !self.round.is_finished() => self.input.push(c),
            _ => {}
        }
        Control::Continue
    }
}
