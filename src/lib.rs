//! flightlog library root.
//! Exposes the CLI parser, the high-level run() function and the sheet core
//! (time arithmetic, row sequencing, totals, lifecycle) used by the commands.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Header { .. } => cli::commands::header::handle(&cli.command, cfg),
        Commands::Add { .. }
        | Commands::Set { .. }
        | Commands::Now { .. }
        | Commands::Clear { .. }
        | Commands::Del { .. } => cli::commands::row::handle(&cli.command, cfg),
        Commands::Duty { .. } => cli::commands::duty::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Close | Commands::New { .. } => {
            cli::commands::lifecycle::handle(&cli.command, cfg)
        }
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Print { .. } => cli::commands::print::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once, then the --db override wins
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = expand_tilde(custom_db).to_string_lossy().to_string();
    }

    dispatch(&cli, &cfg)
}
