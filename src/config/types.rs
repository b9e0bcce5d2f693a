use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal presentation settings. Game rules are fixed and live in
/// `crate::game`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw and timer resolution in milliseconds (default: 50).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long a toast stays on screen, in seconds (default: 3).
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: u64,
    /// Play the confetti burst on a win (default: true).
    #[serde(default = "default_confetti")]
    pub confetti: bool,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "guess_number=debug". `RUST_LOG` wins.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Nothing is logged when unset because the TUI owns stdout.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_toast_seconds() -> u64 {
    3
}

fn default_confetti() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            toast_seconds: default_toast_seconds(),
            confetti: default_confetti(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
