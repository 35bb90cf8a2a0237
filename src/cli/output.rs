//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Result of a merge, as reported to the user.
#[derive(Debug, Serialize)]
pub struct MergeListing {
    pub path: String,
    pub sections: usize,
    pub notes: usize,
    pub images: usize,
}
