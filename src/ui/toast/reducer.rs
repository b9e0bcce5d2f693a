use crate::ui::mvi::Reducer;

use super::intent::ToastIntent;
use super::state::{Toast, ToastState};

/// Toasts stacked on screen at once. Older ones are dropped first.
pub const MAX_TOASTS: usize = 3;

pub struct ToastReducer;

impl Reducer for ToastReducer {
    type State = ToastState;
    type Intent = ToastIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ToastIntent::Push {
                kind,
                message,
                expires_at,
            } => {
                state.push(Toast {
                    kind,
                    message,
                    expires_at,
                });
                while state.len() > MAX_TOASTS {
                    state.pop_oldest();
                }
                state
            }
            ToastIntent::Expire { now } => {
                state.retain_alive(now);
                state
            }
        }
    }
}
