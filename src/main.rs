use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use console::style;

mod cli;
mod core;
mod generators;
mod logging;
mod models;

use crate::cli::Args;
use crate::core::Config;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", style("❌").red(), e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().context("Failed to load .env file")?;
    }

    let args = Args::parse_from(cli::normalize_args(std::env::args_os()));
    let (config, rejected) = Config::load();

    logging::init(&config).context("Failed to initialise logging")?;
    for warning in &rejected {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    let output = cli::handlers::handle_generate(&args, &config)?;
    println!("{}", output);

    Ok(())
}
