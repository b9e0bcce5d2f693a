use thiserror::Error;

use super::session::{GUESS_MAX, GUESS_MIN};

/// Why a submitted guess was not scored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guess is empty")]
    Empty,

    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    #[error("{0} is outside 0..=10")]
    OutOfRange(i64),
}

/// A whole number typed by the player. Not yet range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess(i64);

impl Guess {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Parse raw form input.
    ///
    /// Surrounding whitespace is ignored and a leading `+` or `-` is accepted.
    /// Anything else that is not a whole number is rejected.
    pub fn parse(raw: &str) -> Result<Self, GuessError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GuessError::Empty);
        }
        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|_| GuessError::NotANumber(trimmed.to_string()))
    }

    pub fn value(self) -> i64 {
        self.0
    }

    pub fn in_range(self) -> bool {
        (GUESS_MIN..=GUESS_MAX).contains(&self.0)
    }
}
