//! Handler for the `tree` command.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::TreeArgs;
use crate::cli::config::Config;
use crate::cli::output::OutputFormat;
use crate::domain::{Section, Tree};
use crate::infra::build_tree;

pub fn handle_tree(args: &TreeArgs, notes_dir: &Path, config: &Config) -> Result<()> {
    let excluded = config.excluded_dirs(&args.exclude);
    let tree = build_tree(notes_dir, &excluded)
        .with_context(|| format!("failed to read notes from {}", notes_dir.display()))?;

    match args.format {
        OutputFormat::Human => {
            if tree.is_empty() {
                println!("No notes found");
            } else {
                print!("{}", format_tree(&tree));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
    }

    Ok(())
}

/// Formats the tree as an indented listing; sections end with `/`.
pub fn format_tree(tree: &Section) -> String {
    let mut out = String::new();
    write_level(tree, 0, &mut out);
    out
}

fn write_level(section: &Section, indent: usize, out: &mut String) {
    let pad = "  ".repeat(indent);
    for (key, child) in section.iter() {
        match child {
            Tree::Section(inner) => {
                out.push_str(&format!("{pad}{key}/\n"));
                write_level(inner, indent + 1, out);
            }
            Tree::Leaf(leaf) => {
                out.push_str(&format!("{pad}{}\n", leaf.name()));
            }
        }
    }
}
