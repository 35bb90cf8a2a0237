//! Rendering the notes tree into a single merged markdown document.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::domain::{Leaf, Section, Tree};
use crate::infra::relative_display;

use super::RenderError;
use super::images::{ImageLinkRewriter, find_images, is_absolute_target};

/// Counts collected while rendering.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    /// Top-level section headers written.
    pub sections: usize,
    /// Notes inlined.
    pub notes: usize,
    /// Image references rewritten to remote URLs.
    pub images: usize,
}

/// Trait for receiving progress updates while rendering.
pub trait ProgressReporter {
    /// Called after a note has been fully written.
    fn on_note(&mut self, path: &Path);
    /// Called when the whole tree has been rendered.
    fn on_complete(&mut self, summary: &RenderSummary);
}

/// A no-op progress reporter.
#[derive(Default)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_note(&mut self, _path: &Path) {}
    fn on_complete(&mut self, _summary: &RenderSummary) {}
}

/// Writes a notes tree as one markdown document.
///
/// Top-level sections become underlined headers. Every note is introduced by
/// a `# <relative path>` title and its own headings are pushed
/// `depth - 1` levels deeper, so notes nested further down the directory
/// hierarchy end up with deeper headings. Relative image references are
/// rewritten to absolute URLs on the way through.
pub struct DocumentRenderer<'a> {
    images: &'a ImageLinkRewriter,
    reporter: &'a mut dyn ProgressReporter,
    summary: RenderSummary,
}

impl<'a> DocumentRenderer<'a> {
    pub fn new(images: &'a ImageLinkRewriter, reporter: &'a mut dyn ProgressReporter) -> Self {
        Self {
            images,
            reporter,
            summary: RenderSummary::default(),
        }
    }

    /// Renders the whole tree starting at depth 0 and returns the counts.
    ///
    /// # Errors
    ///
    /// Stops at the first error. Anything already written to `sink` stays
    /// there.
    pub fn render_document<W: Write>(
        mut self,
        tree: &Section,
        sink: &mut W,
    ) -> Result<RenderSummary, RenderError> {
        self.render(tree, 0, sink)?;
        sink.flush().map_err(|source| RenderError::Write { source })?;
        self.reporter.on_complete(&self.summary);
        Ok(self.summary)
    }

    /// Renders the entries of `tree`, which sits at `depth` below the root.
    pub fn render<W: Write>(
        &mut self,
        tree: &Section,
        depth: usize,
        sink: &mut W,
    ) -> Result<(), RenderError> {
        for (key, child) in tree.iter() {
            match child {
                Tree::Section(section) => {
                    if depth == 0 {
                        write_header(key, sink).map_err(|source| RenderError::Write { source })?;
                        self.summary.sections += 1;
                    }
                    self.render(section, depth + 1, sink)?;
                }
                Tree::Leaf(leaf) => self.render_leaf(leaf, depth, sink)?,
            }
        }
        Ok(())
    }

    fn render_leaf<W: Write>(
        &mut self,
        leaf: &Leaf,
        depth: usize,
        sink: &mut W,
    ) -> Result<(), RenderError> {
        let path = leaf.path();
        let write_err = |source| RenderError::Write { source };
        let read_err = |source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        };

        let title = relative_display(self.images.root(), path);
        write!(sink, "# {title}\n\n").map_err(write_err)?;

        let shift = "#".repeat(depth.saturating_sub(1));
        let mut reader = BufReader::new(File::open(path).map_err(read_err)?);
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line).map_err(read_err)? == 0 {
                break;
            }

            if line.starts_with('#') {
                sink.write_all(shift.as_bytes()).map_err(write_err)?;
                sink.write_all(line.as_bytes()).map_err(write_err)?;
                continue;
            }

            let images = find_images(&line);
            if images.is_empty() {
                sink.write_all(line.as_bytes()).map_err(write_err)?;
            } else {
                let rewritten = self.images.rewrite(&line, &images, path)?;
                sink.write_all(rewritten.as_bytes()).map_err(write_err)?;
                self.summary.images += images
                    .iter()
                    .filter(|image| !is_absolute_target(image.target))
                    .count();
            }
        }
        sink.write_all(b"\n").map_err(write_err)?;

        self.summary.notes += 1;
        self.reporter.on_note(path);
        Ok(())
    }
}

/// Writes `name` underlined with `=` followed by a blank line.
fn write_header<W: Write>(name: &str, sink: &mut W) -> io::Result<()> {
    let underline = "=".repeat(name.chars().count());
    write!(sink, "{name}\n{underline}\n\n")
}
