//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since not every helper is used by every test
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Fluent wrapper around `assert_cmd::Command` for the `notes-merger` binary.
pub struct MergerCommand {
    args: Vec<String>,
    home: Option<PathBuf>,
}

impl MergerCommand {
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            home: None,
        }
    }

    /// Points config lookup at `path` instead of the real home directory.
    pub fn home(mut self, path: &Path) -> Self {
        self.home = Some(path.to_path_buf());
        self
    }

    /// Sets the `--dir` option to specify the notes root.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd =
            Command::cargo_bin("notes-merger").expect("Failed to find notes-merger binary");
        if let Some(home) = &self.home {
            cmd.env("HOME", home)
                .env("XDG_CONFIG_HOME", home.join(".config"));
        }
        cmd.args(&self.args).timeout(Duration::from_secs(30));
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    pub fn merge(self) -> Self {
        self.args(["merge"])
    }

    pub fn tree(self) -> Self {
        self.args(["tree"])
    }

    pub fn output(self, path: &Path) -> Self {
        let path = path.to_string_lossy().to_string();
        self.args(["--output", path.as_str()])
    }

    pub fn base_url(self, url: &str) -> Self {
        self.args(["--base-url", url])
    }

    pub fn exclude(self, name: &str) -> Self {
        self.args(["--exclude", name])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for MergerCommand {
    fn default() -> Self {
        Self::new()
    }
}
