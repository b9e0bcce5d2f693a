//! Model-View-Intent primitives for the terminal UI.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! The game session itself is not an MVI state: it lives in `crate::game`
//! and talks to the UI through `GameView`. MVI covers the presentation
//! pieces with their own timing rules (form cooldown, toasts).

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
