//! Merging a notes tree into a single markdown document.
//!
//! Rendering walks the tree depth-first, re-levels note headings by their
//! nesting depth and rewrites relative image references to remote URLs.

pub mod images;
mod render;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use images::{ImageLinkRewriter, ImageRef, find_images, is_absolute_target};
pub use render::{DocumentRenderer, NoopReporter, ProgressReporter, RenderSummary};

/// Errors while rendering the merged document.
///
/// Every variant aborts the merge; nothing is skipped.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("image file not found: {path}")]
    MissingImageFile { path: PathBuf },

    #[error("failed to read note {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write merged document: {source}")]
    Write {
        #[source]
        source: io::Error,
    },

    #[error("base URL cannot hold a path: {url}")]
    InvalidBaseUrl { url: String },

    #[error("invalid image target '{target}': {source}")]
    InvalidImageTarget {
        target: String,
        #[source]
        source: url::ParseError,
    },
}
