//! Directory tree of notes to be merged.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::path::{Path, PathBuf};

/// A node in the notes tree.
///
/// Directories that contain at least one non-excluded subdirectory become
/// sections; files of directories without such subdirectories become leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree {
    Section(Section),
    Leaf(Leaf),
}

/// An ordered set of keyed children representing one directory.
///
/// Keys are unique and kept in insertion order, which is the order the
/// filesystem enumerated them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: Vec<(String, Tree)>,
}

/// A single note file to be inlined into the merged document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    name: String,
    path: PathBuf,
}

impl Section {
    /// Creates an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a child under `key`.
    ///
    /// Returns `false` and leaves the section untouched if `key` is already
    /// present.
    pub fn insert(&mut self, key: impl Into<String>, child: Tree) -> bool {
        let key = key.into();
        if self.contains_key(&key) {
            return false;
        }
        self.entries.push((key, child));
        true
    }

    /// Returns the child stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Tree> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, t)| t)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Iterates over `(key, child)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tree)> {
        self.entries.iter().map(|(k, t)| (k.as_str(), t))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keeps only the leaves for which `keep` returns true, at every depth.
    ///
    /// Sections are kept even if they end up empty.
    pub fn retain_leaves<F: FnMut(&Leaf) -> bool>(&mut self, mut keep: F) {
        self.retain_leaves_with(&mut keep);
    }

    fn retain_leaves_with(&mut self, keep: &mut dyn FnMut(&Leaf) -> bool) {
        self.entries.retain_mut(|(_, child)| match child {
            Tree::Section(section) => {
                section.retain_leaves_with(keep);
                true
            }
            Tree::Leaf(leaf) => keep(leaf),
        });
    }

    /// Counts the leaves reachable from this section.
    pub fn leaf_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, child)| match child {
                Tree::Section(section) => section.leaf_count(),
                Tree::Leaf(_) => 1,
            })
            .sum()
    }
}

impl Leaf {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// The file name this leaf is keyed by.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the note file on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, child) in &self.entries {
            map.serialize_entry(key, child)?;
        }
        map.end()
    }
}

impl Serialize for Tree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Tree::Section(section) => section.serialize(serializer),
            Tree::Leaf(leaf) => serializer.collect_str(&leaf.path.display()),
        }
    }
}
