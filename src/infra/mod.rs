//! Filesystem traversal

mod fs;

pub use fs::{FsError, build_tree, relative_display};
