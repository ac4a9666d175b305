use std::io::IsTerminal;

use clap::Parser;
use eyre::{Context, Result};
use log::info;

use hyperion::cli::Cli;
use hyperion::config::Config;

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
        .context("Logger already initialized")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(file) = cli.file {
        config.data_file = file;
    }

    info!("hyperion starting with task file {}", config.data_file.display());
    hyperion::repl::run(&config)
}
