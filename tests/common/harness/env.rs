//! Isolated test environment with temp directories.

use super::MergerCommand;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Base URL used by tests that rewrite image links.
pub const BASE_URL: &str = "https://example.com/Notes/";

/// Isolated test environment.
///
/// Holds a notes root, a separate output directory and an empty home so the
/// user's real config file is never read.
pub struct TestEnv {
    _temp_dir: TempDir,
    notes_dir: PathBuf,
    out_dir: PathBuf,
    home_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().join("Notes");
        let out_dir = temp_dir.path().join("out");
        let home_dir = temp_dir.path().join("home");
        for dir in [&notes_dir, &out_dir, &home_dir] {
            fs::create_dir_all(dir).expect("Failed to create directory");
        }
        Self {
            _temp_dir: temp_dir,
            notes_dir,
            out_dir,
            home_dir,
        }
    }

    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    /// Path of the merged document written by `merge_cmd`.
    pub fn output_path(&self) -> PathBuf {
        self.out_dir.join("MergedNotes.md")
    }

    /// Writes a file below the notes root, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.notes_dir.join(rel);
        fs::create_dir_all(path.parent().expect("path has parent"))
            .expect("Failed to create parent directory");
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Reads the merged document.
    pub fn merged(&self) -> String {
        fs::read_to_string(self.output_path()).expect("Failed to read merged document")
    }

    /// Command pointed at this environment's notes root and home.
    pub fn cmd(&self) -> MergerCommand {
        MergerCommand::new()
            .home(&self.home_dir)
            .dir(&self.notes_dir)
    }

    /// `merge` command writing to `output_path` with the test base URL.
    pub fn merge_cmd(&self) -> MergerCommand {
        self.cmd().merge().output(&self.output_path()).base_url(BASE_URL)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
