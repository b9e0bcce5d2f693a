//! Terminal front end.
//!
//! `runtime::run` owns the terminal and the event loop; `App` owns the game
//! round and its `Screen`; `render` draws both every frame.

pub mod app;
pub mod confetti;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod screen;
pub mod terminal_guard;
pub mod theme;
pub mod toast;
