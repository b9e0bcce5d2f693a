use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::GuessFormState;

/// Longest text the number field holds.
pub const MAX_INPUT_LEN: usize = 4;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = GuessFormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Remove => GuessFormState::Removed,
            FormIntent::Type(ch) => match state {
                GuessFormState::Active { mut input } => {
                    if accepts_char(&input, ch) {
                        input.push(ch);
                    }
                    GuessFormState::Active { input }
                }
                other => other,
            },
            FormIntent::Backspace => match state {
                GuessFormState::Active { mut input } => {
                    input.pop();
                    GuessFormState::Active { input }
                }
                other => other,
            },
            FormIntent::Reset => match state {
                GuessFormState::Active { .. } => GuessFormState::default(),
                GuessFormState::CoolingDown { cooldown, .. } => GuessFormState::CoolingDown {
                    input: String::new(),
                    cooldown,
                },
                GuessFormState::Removed => GuessFormState::Removed,
            },
            FormIntent::StartCooldown(cooldown) => match state {
                GuessFormState::Active { input } | GuessFormState::CoolingDown { input, .. } => {
                    GuessFormState::CoolingDown { input, cooldown }
                }
                GuessFormState::Removed => GuessFormState::Removed,
            },
            FormIntent::Tick { now } => match state {
                GuessFormState::CoolingDown { input, cooldown } if cooldown.is_elapsed(now) => {
                    GuessFormState::Active { input }
                }
                other => other,
            },
        }
    }
}

/// Number-field rules: digits anywhere, a minus sign only first.
fn accepts_char(input: &str, ch: char) -> bool {
    if input.chars().count() >= MAX_INPUT_LEN {
        return false;
    }
    ch.is_ascii_digit() || (ch == '-' && input.is_empty())
}
