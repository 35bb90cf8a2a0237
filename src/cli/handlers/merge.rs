//! Handler for the `merge` command.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use super::ConsoleReporter;
use crate::cli::config::Config;
use crate::cli::output::{MergeListing, OutputFormat};
use crate::cli::MergeArgs;
use crate::domain::Section;
use crate::export::{DocumentRenderer, ImageLinkRewriter};
use crate::infra::build_tree;

pub fn handle_merge(
    args: &MergeArgs,
    notes_dir: &Path,
    config: &Config,
    verbose: bool,
) -> Result<()> {
    let excluded = config.excluded_dirs(&args.exclude);
    let base_url = config.base_url(args.base_url.as_deref())?;
    let output_path = config.output(args.output.as_ref());

    let rewriter = ImageLinkRewriter::new(notes_dir, base_url)?;
    let mut tree = build_tree(notes_dir, &excluded)
        .with_context(|| format!("failed to read notes from {}", notes_dir.display()))?;
    skip_output(&mut tree, &output_path);

    let file = File::create(&output_path)
        .with_context(|| format!("failed to create {}", output_path.display()))?;
    let mut sink = BufWriter::new(file);
    let mut reporter = ConsoleReporter::new(verbose);

    let summary = DocumentRenderer::new(&rewriter, &mut reporter)
        .render_document(&tree, &mut sink)
        .with_context(|| format!("failed to merge notes into {}", output_path.display()))?;

    let listing = MergeListing {
        path: output_path.display().to_string(),
        sections: summary.sections,
        notes: summary.notes,
        images: summary.images,
    };
    match args.format {
        OutputFormat::Human => println!(
            "Merged {} notes from {} into {}",
            listing.notes,
            notes_dir.display(),
            listing.path
        ),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listing)?),
    }

    Ok(())
}

/// Drops the merged document from the tree when it lives below the notes root.
///
/// The output file is truncated before rendering starts, so reading it back
/// as a note would feed the merge its own output.
fn skip_output(tree: &mut Section, output_path: &Path) {
    let Ok(output) = fs::canonicalize(output_path) else {
        return;
    };
    tree.retain_leaves(|leaf| !fs::canonicalize(leaf.path()).is_ok_and(|path| path == output));
}
