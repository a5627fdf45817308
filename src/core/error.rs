use thiserror::Error;

/// Reasons a guess was rejected. None of them touch the round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The text was not an integer.
    #[error("Please enter a valid integer (got {input:?}).")]
    NotANumber { input: String },

    /// The integer lies outside `1..=max`.
    #[error("Please enter a number between 1 and {max}.")]
    OutOfRange { value: i64, max: u32 },

    /// The round already ended; start a new one first.
    #[error("This round is over. Start a new game to keep playing.")]
    RoundOver,
}
