use tracing::{debug, info};

use crate::confetti::ConfettiBurst;

use super::guess::Guess;
use super::random::RandomSource;
use super::session::{Outcome, Session, COOLDOWN};
use super::view::{GameView, MessageKind, NotificationKind};

pub const RANGE_WARNING: &str = "Please enter a number from 0 to 10!";
pub const WIN_MESSAGE: &str = "You guessed it 🥳!";
pub const MISS_MESSAGE_PREFIX: &str = "Try again. Attempts left";
pub const LOSS_MESSAGE_PREFIX: &str = "You lost 🥲! The number you guessed -";

/// Top-level game loop handler: owns the session and the randomness used
/// for it, and turns outcomes into view calls.
pub struct GameSession<R> {
    session: Session,
    rng: R,
}

impl<R: RandomSource> GameSession<R> {
    /// Start a new round with a freshly drawn secret.
    pub fn initialize(mut rng: R) -> Self {
        let session = Session::new(&mut rng);
        Self::from_parts(session, rng)
    }

    /// Resume with an existing session. Used when the secret must be known.
    pub fn from_parts(session: Session, rng: R) -> Self {
        info!(session_id = %session.id(), "Game session started");
        debug!(session_id = %session.id(), "The number that was guessed is {}", session.secret());
        Self { session, rng }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Handle one form submission.
    ///
    /// Empty, non-numeric and out-of-range input all get the same warning
    /// toast and leave the session untouched.
    pub fn submit_guess<V: GameView + ?Sized>(&mut self, raw: &str, view: &mut V) -> Outcome {
        let outcome = match Guess::parse(raw) {
            Ok(guess) => self.session.submit(guess),
            Err(err) => Outcome::Rejected(err),
        };

        match &outcome {
            Outcome::Rejected(err) => {
                debug!(session_id = %self.session.id(), error = %err, "Guess rejected");
                view.notify(NotificationKind::Warning, RANGE_WARNING);
            }
            Outcome::Won => {
                info!(
                    session_id = %self.session.id(),
                    attempts_remaining = self.session.attempts_remaining(),
                    "Player won"
                );
                view.remove_form();
                view.show_message(MessageKind::Success, WIN_MESSAGE);
                view.celebrate(ConfettiBurst::random(&mut self.rng));
                self.restart(view);
            }
            Outcome::Lost { secret } => {
                info!(session_id = %self.session.id(), secret, "Player lost");
                view.remove_form();
                view.show_message(
                    MessageKind::Lost,
                    &format!("{LOSS_MESSAGE_PREFIX} {secret}"),
                );
                self.restart(view);
            }
            Outcome::Missed { attempts_left } => {
                debug!(session_id = %self.session.id(), attempts_left, "Wrong guess");
                view.show_message(
                    MessageKind::Error,
                    &format!("{MISS_MESSAGE_PREFIX} {attempts_left}"),
                );
                view.start_cooldown(COOLDOWN);
                view.reset_form();
            }
            Outcome::AlreadyOver(status) => {
                debug!(session_id = %self.session.id(), ?status, "Guess after game over ignored");
            }
        }

        outcome
    }

    /// Surface the play-again control.
    ///
    /// Activating it is the host's job and must rebuild everything from
    /// scratch; this session is never reset in place.
    pub fn restart<V: GameView + ?Sized>(&self, view: &mut V) {
        view.offer_restart();
    }
}
