use std::io;

use anyhow::{Context, Result};
use cartoni::{
    cli::{self, Cli},
    config,
};
use clap::Parser;

fn main() -> Result<()> {
    let args = Cli::parse();
    let config = config::load_config().context("failed to load application config")?;
    // Production deployments always log structured JSON
    config::init_tracing(config.log_level(), config.log_json || config.is_production());

    cli::esegui(args, config, &mut io::stdout().lock())
}
