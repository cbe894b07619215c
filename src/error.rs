#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Console i/o error (error: {0})")]
    Io(#[from] std::io::Error),
}

/// Rejection of a guess line. Never consumes an attempt.
/// The `Display` text is what the player sees.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("Invalid input! Please enter a valid number.")]
    NotANumber(String),
    #[error(
        "Please enter a number between {min} and {max}!",
        min = crate::session::MIN_GUESS,
        max = crate::session::MAX_GUESS
    )]
    OutOfRange(i64),
}
