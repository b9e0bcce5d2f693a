//! Transient notifications (toasts).
//!
//! - `state.rs` - Queue of live toasts with their expiry
//! - `intent.rs` - Push and clock-driven expiry
//! - `reducer.rs` - Queue transitions
//! - `widget.rs` - Stacked rendering in the top-right corner

mod intent;
mod reducer;
mod state;
mod widget;

pub use intent::ToastIntent;
pub use reducer::{ToastReducer, MAX_TOASTS};
pub use state::{Toast, ToastState};
pub use widget::render_toasts;
