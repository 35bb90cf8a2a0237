//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// notes-merger - merge a directory of markdown notes into one document
#[derive(Parser, Debug)]
#[command(name = "notes-merger", version, about, long_about = None)]
pub struct Cli {
    /// Notes root directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge all notes into a single markdown file
    Merge(MergeArgs),

    /// Show which notes would be merged and how they are grouped
    Tree(TreeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `merge` command
#[derive(Parser, Debug)]
pub struct MergeArgs {
    /// Output file (overwritten)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory name to leave out (can be specified multiple times)
    #[arg(short = 'x', long = "exclude", action = ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Remote base URL that relative image links are rewritten against
    #[arg(short = 'u', long)]
    pub base_url: Option<String>,

    /// Output format for the summary
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tree` command
#[derive(Parser, Debug)]
pub struct TreeArgs {
    /// Directory name to leave out (can be specified multiple times)
    #[arg(short = 'x', long = "exclude", action = ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
