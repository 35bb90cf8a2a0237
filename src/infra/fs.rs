//! Building the notes tree from a directory hierarchy.

use crate::domain::{Leaf, Section, Tree};
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Errors while reading the notes directory.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Builds the notes tree rooted at `root`.
///
/// Subdirectories whose name is in `excluded` are ignored at every level.
/// A directory with no remaining subdirectories contributes its files as
/// leaves keyed by file name. Otherwise each remaining subdirectory becomes
/// a section keyed by its path relative to `root`, and the directory's own
/// files are not captured.
///
/// Entries keep the order the filesystem lists them in.
///
/// # Errors
///
/// Returns `FsError::NotADirectory` if `root` does not exist or is not a
/// directory, and `FsError::Io` if any directory listing fails.
pub fn build_tree(root: &Path, excluded: &[String]) -> Result<Section, FsError> {
    if !root.is_dir() {
        return Err(FsError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    build_section(root, root, excluded)
}

fn build_section(root: &Path, dir: &Path, excluded: &[String]) -> Result<Section, FsError> {
    let mut subdirs = Vec::new();
    let mut files = Vec::new();

    let listing = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);
    for entry in listing {
        let entry = entry.map_err(|e| FsError::Io {
            path: e.path().unwrap_or(dir).to_path_buf(),
            source: io::Error::from(e),
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().is_dir() {
            if !excluded.contains(&name) {
                subdirs.push(entry.into_path());
            }
        } else {
            files.push((name, entry.into_path()));
        }
    }

    let mut section = Section::new();
    if subdirs.is_empty() {
        for (name, path) in files {
            section.insert(name.clone(), Tree::Leaf(Leaf::new(name, path)));
        }
        return Ok(section);
    }

    for subdir in subdirs {
        let child = build_section(root, &subdir, excluded)?;
        section.insert(relative_display(root, &subdir), Tree::Section(child));
    }
    Ok(section)
}

/// Renders `path` relative to `root` with `/` separators.
///
/// Paths outside `root` are rendered whole.
pub fn relative_display(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
