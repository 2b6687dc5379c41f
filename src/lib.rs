//! rAttendview library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logger;
pub mod models;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use source::RowSource;
use tracing::debug;

/// Central command dispatcher for the commands that read the sheet.
pub fn dispatch(cli: &Cli, cfg: &Config, source: &dyn RowSource) -> AppResult<()> {
    match &cli.command {
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg, source),
        Commands::Months { .. } => cli::commands::months::handle(&cli.command, cfg, source),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, source),
        Commands::Init { .. } | Commands::Config { .. } => Ok(()),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    logger::init_tracing(cli.verbose);

    // 2️⃣ carica config UNA sola volta
    let config_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);
    debug!(path = %config_path.display(), "configuration file");

    // 3️⃣ comandi che non leggono il foglio
    match &cli.command {
        Commands::Init { .. } => return cli::commands::init::handle(&cli.command, &config_path),
        Commands::Config { .. } => {
            let cfg = Config::load_from(&config_path)?;
            return cli::commands::config::handle(&cli.command, &cfg, &config_path);
        }
        _ => {}
    }

    let cfg = Config::load_from(&config_path)?;

    // 4️⃣ la sorgente viene creata una volta e passata per riferimento
    let source = source::from_config(&cfg, cli.source_file.as_deref())?;

    dispatch(&cli, &cfg, source.as_ref())
}
