use std::time::Instant;

use crate::game::NotificationKind;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ToastIntent {
    Push {
        kind: NotificationKind,
        message: String,
        expires_at: Instant,
    },
    /// Drop every toast whose expiry is at or before `now`.
    Expire { now: Instant },
}

impl Intent for ToastIntent {}
