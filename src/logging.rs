use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global tracing subscriber.
///
/// Logs go to `config.file`; without a file nothing is installed since the
/// terminal UI owns stdout and stderr. `RUST_LOG` overrides `config.level`.
/// Returns `true` when a subscriber was installed.
pub fn init_tracing(config: &LoggingConfig) -> io::Result<bool> {
    let Some(path) = config.file.as_deref() else {
        return Ok(false);
    };
    let file = open_log_file(path)?;

    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = resolve_filter(env.as_deref(), &config.level);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| io::Error::other(err.to_string()))?;

    Ok(true)
}

/// A parseable `RUST_LOG` value wins; anything else falls back to `level`.
fn resolve_filter(env: Option<&str>, level: &str) -> EnvFilter {
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level))
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
