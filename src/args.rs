//! Command-line flags. They override values from `config.toml`.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "guess-number", version, about = "Guess the number between 0 and 10 in three tries")]
pub struct Cli {
    /// Path to config.toml (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for the secret and effects, for reproducible rounds
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Skip the confetti burst on a win
    #[arg(long)]
    pub no_confetti: bool,
}

impl Cli {
    /// Apply flag overrides onto a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if self.no_confetti {
            config.ui.confetti = false;
        }
    }
}
