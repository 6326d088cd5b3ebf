//! otfmail library root.
//! Exposes the CLI parser, high-level run() function, and the extraction
//! engine (decode → locate → extract → assemble).

pub mod cli;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli) -> AppResult<()> {
    match &cli.command {
        Commands::Parse { .. } => cli::commands::parse::handle(&cli.command),
        Commands::Decode { .. } => cli::commands::decode::handle(&cli.command),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    dispatch(&cli)
}
