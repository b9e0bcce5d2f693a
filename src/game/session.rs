use std::time::Duration;

use thiserror::Error;
use uuid::Uuid;

use super::guess::{Guess, GuessError};
use super::random::RandomSource;

/// Smallest value the secret can take.
pub const SECRET_MIN: i64 = 1;
/// Largest value the secret can take.
pub const SECRET_MAX: i64 = 10;
/// Smallest guess accepted for scoring.
pub const GUESS_MIN: i64 = 0;
/// Largest guess accepted for scoring.
pub const GUESS_MAX: i64 = 10;
/// Wrong guesses allowed per session.
pub const MAX_ATTEMPTS: u8 = 3;
/// Input lockout after a wrong guess that still leaves attempts.
pub const COOLDOWN: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Result of feeding one guess into a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input was not a scoreable guess. Nothing changed.
    Rejected(GuessError),
    /// Wrong guess, attempts remain.
    Missed { attempts_left: u8 },
    Won,
    /// Wrong guess that used up the last attempt.
    Lost { secret: i64 },
    /// The session already ended. Nothing changed.
    AlreadyOver(Status),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("secret {0} is outside 1..=10")]
    SecretOutOfRange(i64),
}

/// One round of the game.
///
/// The secret is drawn once and never changes; a new round means a new
/// `Session`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: Uuid,
    secret: i64,
    attempts_remaining: u8,
    status: Status,
}

impl Session {
    pub fn new<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let secret = rng.random_number(SECRET_MIN, SECRET_MAX);
        Self::fresh(secret)
    }

    pub fn with_secret(secret: i64) -> Result<Self, SessionError> {
        if !(SECRET_MIN..=SECRET_MAX).contains(&secret) {
            return Err(SessionError::SecretOutOfRange(secret));
        }
        Ok(Self::fresh(secret))
    }

    fn fresh(secret: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            secret,
            attempts_remaining: MAX_ATTEMPTS,
            status: Status::Playing,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn secret(&self) -> i64 {
        self.secret
    }

    pub fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Score one guess.
    ///
    /// Out-of-range guesses are rejected without consuming an attempt.
    /// `Won` and `Lost` are terminal: every later call returns `AlreadyOver`.
    pub fn submit(&mut self, guess: Guess) -> Outcome {
        if self.status.is_terminal() {
            return Outcome::AlreadyOver(self.status);
        }
        if !guess.in_range() {
            return Outcome::Rejected(GuessError::OutOfRange(guess.value()));
        }
        if guess.value() == self.secret {
            self.status = Status::Won;
            return Outcome::Won;
        }

        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        if self.attempts_remaining == 0 {
            self.status = Status::Lost;
            Outcome::Lost {
                secret: self.secret,
            }
        } else {
            Outcome::Missed {
                attempts_left: self.attempts_remaining,
            }
        }
    }
}
