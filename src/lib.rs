//! rLabourRatio library root.
//! Exposes the CLI parser, the high-level run() function, and the hourly
//! labour/sales pipeline (parsing, allocation, aggregation, ratio analysis).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod input;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Analyze { .. } => cli::commands::analyze::handle(&cli.command, cfg),
        Commands::Labour | Commands::Sales | Commands::Ratio => {
            cli::commands::tables::handle(&cli.command, cfg)
        }
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Config { .. } => {
            let path = Config::resolve_path(cli.config.as_deref());
            cli::commands::config::handle(&cli.command, cfg, &path)
        }
    }
}

/// Install the stderr tracing subscriber when `--debug` is given.
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_tracing(cli.debug);

    // 2️⃣ load config once
    let mut cfg = Config::load(&Config::resolve_path(cli.config.as_deref()))?;

    // 3️⃣ command-line overrides of the input files
    if let Some(shifts) = &cli.shifts {
        cfg.shifts_file = shifts.clone();
    }
    if let Some(transactions) = &cli.transactions {
        cfg.transactions_file = transactions.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
