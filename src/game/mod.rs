//! Number-guessing game core.
//!
//! Everything in here is host-agnostic: the session state machine is pure,
//! and every presentation side effect goes through [`GameView`].
//!
//! ```text
//! raw input ──→ Guess::parse ──→ Session::submit ──→ Outcome
//!                                                      │
//!                    GameSession::submit_guess ◀───────┘
//!                                │
//!                                ▼
//!                            GameView
//! ```

mod controller;
mod guess;
mod random;
mod session;
mod view;

pub use controller::{
    GameSession, LOSS_MESSAGE_PREFIX, MISS_MESSAGE_PREFIX, RANGE_WARNING, WIN_MESSAGE,
};
pub use guess::{Guess, GuessError};
pub use random::{seeded_rng, RandomSource};
pub use session::{
    Outcome, Session, SessionError, Status, COOLDOWN, GUESS_MAX, GUESS_MIN, MAX_ATTEMPTS,
    SECRET_MAX, SECRET_MIN,
};
pub use view::{GameView, MessageKind, NotificationKind};
