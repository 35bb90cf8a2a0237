//! Command handlers for the CLI.

mod completions;
mod merge;
mod tree;

use std::path::Path;

use crate::export::{ProgressReporter, RenderSummary};

pub use completions::handle_completions;
pub use merge::handle_merge;
pub use tree::{format_tree, handle_tree};

/// Progress reporter that prints to stdout.
pub(crate) struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub(crate) fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ProgressReporter for ConsoleReporter {
    fn on_note(&mut self, path: &Path) {
        if self.verbose {
            println!("  merged: {}", path.display());
        }
    }

    fn on_complete(&mut self, summary: &RenderSummary) {
        if self.verbose {
            println!(
                "  {} sections, {} notes, {} images rewritten",
                summary.sections, summary.notes, summary.images
            );
        }
    }
}
