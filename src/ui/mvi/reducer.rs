//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place a UI state changes: `(State, Intent) -> State`.
///
/// Reducers never touch the terminal or read the clock. Time arrives inside
/// intents so transitions stay reproducible in tests.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
