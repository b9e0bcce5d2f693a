//! View model behind the terminal UI.
//!
//! `Screen` is what the game session draws on: it implements [`GameView`]
//! and keeps every presentation detail (form lockout, alert text, toasts,
//! confetti) out of the session itself.

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;

use crate::confetti::{ConfettiBurst, ConfettiField};
use crate::config::MAX_TOAST_SECONDS;
use crate::game::{GameView, MessageKind, NotificationKind};
use crate::ui::form::{Cooldown, FormIntent, FormReducer, GuessFormState};
use crate::ui::mvi::Reducer;
use crate::ui::toast::{ToastIntent, ToastReducer, ToastState};

/// Text shown in the alert region under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: MessageKind,
    pub text: String,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct Screen {
    form: GuessFormState,
    toasts: ToastState,
    alert: Option<Alert>,
    confetti: Option<ConfettiField>,
    restart_offered: bool,
    toast_ttl: Duration,
    confetti_enabled: bool,
    rng: SmallRng,
}

impl Screen {
    /// `rng` only drives particle jitter; burst parameters come from the game.
    pub fn new(toast_ttl: Duration, confetti_enabled: bool, rng: SmallRng) -> Self {
        Self {
            form: GuessFormState::default(),
            toasts: ToastState::default(),
            alert: None,
            confetti: None,
            restart_offered: false,
            toast_ttl,
            confetti_enabled,
            rng,
        }
    }

    pub fn form(&self) -> &GuessFormState {
        &self.form
    }

    pub fn toasts(&self) -> &ToastState {
        &self.toasts
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn confetti(&self) -> Option<&ConfettiField> {
        self.confetti.as_ref()
    }

    pub fn restart_offered(&self) -> bool {
        self.restart_offered
    }

    pub fn type_char(&mut self, ch: char) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::Type(ch));
    }

    pub fn backspace(&mut self) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::Backspace);
    }

    /// Advance timers and animations to `now`.
    pub fn on_tick(&mut self, now: Instant) {
        let was_cooling = self.form.is_cooling_down();
        dispatch_mvi!(self, form, FormReducer, FormIntent::Tick { now });
        if was_cooling && self.form.accepts_input() {
            // Lockout over: the error alert goes away with it.
            if matches!(&self.alert, Some(alert) if alert.kind == MessageKind::Error) {
                self.alert = None;
            }
        }

        if !self.toasts.is_empty() {
            dispatch_mvi!(self, toasts, ToastReducer, ToastIntent::Expire { now });
        }

        if let Some(field) = &mut self.confetti {
            field.step();
            if field.is_finished() {
                self.confetti = None;
            }
        }
    }

    /// True while something on screen changes without user input.
    pub fn is_animating(&self) -> bool {
        self.confetti.is_some() || self.form.is_cooling_down() || !self.toasts.is_empty()
    }
}

impl GameView for Screen {
    fn notify(&mut self, kind: NotificationKind, message: &str) {
        let now = Instant::now();
        let expires_at = now
            .checked_add(self.toast_ttl)
            .unwrap_or_else(|| now + Duration::from_secs(MAX_TOAST_SECONDS));
        dispatch_mvi!(
            self,
            toasts,
            ToastReducer,
            ToastIntent::Push {
                kind,
                message: message.to_string(),
                expires_at,
            }
        );
    }

    fn show_message(&mut self, kind: MessageKind, text: &str) {
        self.alert = Some(Alert {
            kind,
            text: text.to_string(),
        });
    }

    fn start_cooldown(&mut self, duration: Duration) {
        let cooldown = Cooldown::new(Instant::now(), duration);
        dispatch_mvi!(self, form, FormReducer, FormIntent::StartCooldown(cooldown));
    }

    fn reset_form(&mut self) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::Reset);
    }

    fn remove_form(&mut self) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::Remove);
    }

    fn celebrate(&mut self, burst: ConfettiBurst) {
        if self.confetti_enabled {
            self.confetti = Some(ConfettiField::launch(burst, &mut self.rng));
        }
    }

    fn offer_restart(&mut self) {
        self.restart_offered = true;
    }
}
