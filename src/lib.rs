pub mod args;
pub mod confetti;
pub mod config;
pub mod game;
pub mod logging;
pub mod ui;
