use std::time::Instant;

use super::state::Cooldown;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// A character typed into the number field. Non-numeric input is dropped.
    Type(char),
    Backspace,
    /// Clear the field, like `form.reset()`.
    Reset,
    /// Lock the field after a wrong guess. Replaces a running cooldown.
    StartCooldown(Cooldown),
    /// Clock advanced. Ends the cooldown once it has elapsed.
    Tick { now: Instant },
    /// Game over: the form leaves the screen for good.
    Remove,
}

impl Intent for FormIntent {}
