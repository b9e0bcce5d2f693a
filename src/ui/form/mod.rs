//! Guess form feature module.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Form state enum (Active → CoolingDown → Active, or Removed)
//! - `intent.rs` - Key edits, cooldown start, clock ticks, removal
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use reducer::{FormReducer, MAX_INPUT_LEN};
pub use state::{Cooldown, GuessFormState};
