//! Configuration loaded from `config.toml`.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_TOAST_SECONDS};
pub use types::{Config, LoggingConfig, UiConfig};
