pub mod core {
	pub mod difficulty;
	pub mod error;
	pub mod round;
	pub mod score;
}

pub mod app;
pub mod cli;
pub mod prompt;
pub mod tui;
pub mod ui;

// Re-export for convenience
pub use crate::app::{App, Feedback};
pub use crate::core::difficulty::Difficulty;
pub use crate::core::error::GuessError;
pub use crate::core::round::{Direction, GuessOutcome, Round, RoundStatus};
pub use crate::core::score::{FileBackend, MemoryBackend, ScoreBackend, ScoreStore};
