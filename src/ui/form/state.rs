use std::time::{Duration, Instant};

use crate::ui::mvi::UiState;

/// Handle for a scheduled input lockout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cooldown {
    started: Instant,
    duration: Duration,
}

impl Cooldown {
    pub fn new(started: Instant, duration: Duration) -> Self {
        Self { started, duration }
    }

    pub fn ends_at(&self) -> Instant {
        self.started + self.duration
    }

    pub fn is_elapsed(&self, now: Instant) -> bool {
        now >= self.ends_at()
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.ends_at().saturating_duration_since(now)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuessFormState {
    /// Field enabled and focused.
    Active { input: String },

    /// Field disabled and styled as erroneous until the cooldown elapses.
    CoolingDown { input: String, cooldown: Cooldown },

    /// Round is over. Terminal.
    Removed,
}

impl Default for GuessFormState {
    fn default() -> Self {
        GuessFormState::Active {
            input: String::new(),
        }
    }
}

impl UiState for GuessFormState {}

impl GuessFormState {
    pub fn input(&self) -> &str {
        match self {
            Self::Active { input } | Self::CoolingDown { input, .. } => input,
            Self::Removed => "",
        }
    }

    /// True when keystrokes reach the field (it has focus).
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    pub fn is_cooling_down(&self) -> bool {
        matches!(self, Self::CoolingDown { .. })
    }

    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed)
    }

    pub fn cooldown(&self) -> Option<Cooldown> {
        match self {
            Self::CoolingDown { cooldown, .. } => Some(*cooldown),
            _ => None,
        }
    }
}
