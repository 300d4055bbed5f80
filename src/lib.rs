//! liqbook library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! classification, chart and booklet modules.

pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Sample { .. } => cli::commands::sample::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Charts { .. } => cli::commands::charts::handle(&cli.command, cfg),
        Commands::Build { .. } => cli::commands::build::handle(&cli.command, cfg),
        Commands::Table { .. } => cli::commands::table::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config is loaded once; a missing file means defaults
    let config_path: Option<PathBuf> = cli.config.as_deref().map(expand_tilde);
    let cfg = Config::load(config_path.as_deref())?;

    dispatch(&cli, &cfg)
}
