//! notes-merger - merge a directory tree of markdown notes into one document

pub mod cli;
pub mod domain;
pub mod export;
pub mod infra;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_completions, handle_merge, handle_tree},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let notes_dir = config.notes_dir(cli.dir.as_ref());
    let verbose = cli.verbose > 0;

    match &cli.command {
        Command::Merge(args) => handle_merge(args, &notes_dir, &config, verbose),
        Command::Tree(args) => handle_tree(args, &notes_dir, &config),
        Command::Completions(args) => handle_completions(args),
    }
}
