use std::collections::VecDeque;
use std::time::Instant;

use crate::game::NotificationKind;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: NotificationKind,
    pub message: String,
    pub expires_at: Instant,
}

/// Live toasts, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    toasts: VecDeque<Toast>,
}

impl UiState for ToastState {}

impl ToastState {
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub(super) fn push(&mut self, toast: Toast) {
        self.toasts.push_back(toast);
    }

    pub(super) fn pop_oldest(&mut self) {
        self.toasts.pop_front();
    }

    pub(super) fn retain_alive(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }
}
