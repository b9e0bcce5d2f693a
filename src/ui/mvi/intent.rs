//! Intents: things that happened and that a reducer should react to.

/// Marker trait for intent objects.
///
/// In this crate intents come from key presses routed to the form and from
/// timer ticks that expire cooldowns and toasts.
pub trait Intent: Send + 'static {}
