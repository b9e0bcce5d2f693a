use anyhow::{Context, Result};
use clap::Parser;
use guess_number::args::Cli;
use guess_number::config::Config;
use guess_number::logging::init_tracing;
use guess_number::ui;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(&config.logging).context("Failed to initialise logging")?;
    tracing::info!(seed = ?cli.seed, "Starting guess-number");

    ui::runtime::run(&config, cli.seed).context("Terminal UI failed")?;

    tracing::info!("Exited cleanly");
    Ok(())
}
