//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use guess_number::confetti::ConfettiBurst;
use guess_number::config::{Config, UiConfig};
use guess_number::game::{seeded_rng, GameSession, GameView, MessageKind, NotificationKind, Session};
use rand::rngs::SmallRng;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Every call a `GameSession` made on its view, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    Notify(NotificationKind, String),
    Message(MessageKind, String),
    Cooldown(Duration),
    ResetForm,
    RemoveForm,
    Celebrate(ConfettiBurst),
    OfferRestart,
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
}

impl RecordingView {
    pub fn take(&mut self) -> Vec<ViewCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn celebrated(&self) -> bool {
        self.calls.iter().any(|c| matches!(c, ViewCall::Celebrate(_)))
    }
}

impl GameView for RecordingView {
    fn notify(&mut self, kind: NotificationKind, message: &str) {
        self.calls.push(ViewCall::Notify(kind, message.to_string()));
    }

    fn show_message(&mut self, kind: MessageKind, text: &str) {
        self.calls.push(ViewCall::Message(kind, text.to_string()));
    }

    fn start_cooldown(&mut self, duration: Duration) {
        self.calls.push(ViewCall::Cooldown(duration));
    }

    fn reset_form(&mut self) {
        self.calls.push(ViewCall::ResetForm);
    }

    fn remove_form(&mut self) {
        self.calls.push(ViewCall::RemoveForm);
    }

    fn celebrate(&mut self, burst: ConfettiBurst) {
        self.calls.push(ViewCall::Celebrate(burst));
    }

    fn offer_restart(&mut self) {
        self.calls.push(ViewCall::OfferRestart);
    }
}

/// Game with a known secret and a deterministic effect RNG.
pub fn game_with_secret(secret: i64) -> GameSession<SmallRng> {
    let session = Session::with_secret(secret).expect("valid secret");
    GameSession::from_parts(session, seeded_rng(Some(1)))
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
