//! Configuration file support.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

/// Directory excluded when neither the CLI nor the config name any.
pub const DEFAULT_EXCLUDED_DIR: &str = "_images";

/// Output file used when neither the CLI nor the config name one.
pub const DEFAULT_OUTPUT: &str = "MergedNotes.md";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default notes root directory
    pub dir: Option<PathBuf>,

    /// Remote base URL for rewritten image links
    pub base_url: Option<String>,

    /// Directory names left out of the merge
    pub exclude: Option<Vec<String>>,

    /// Merged document path
    pub output: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `config_path`, defaulting if it is absent.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/notes-merger/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notes-merger")
            .join("config.toml")
    }

    /// Resolve the notes root, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. Current working directory
    pub fn notes_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve excluded directory names.
    ///
    /// CLI `--exclude` values replace the config list; with neither, only
    /// `_images` is excluded.
    pub fn excluded_dirs(&self, cli_exclude: &[String]) -> Vec<String> {
        if !cli_exclude.is_empty() {
            return cli_exclude.to_vec();
        }
        self.exclude
            .clone()
            .unwrap_or_else(|| vec![DEFAULT_EXCLUDED_DIR.to_string()])
    }

    /// Resolve the merged document path.
    pub fn output(&self, cli_output: Option<&PathBuf>) -> PathBuf {
        cli_output
            .cloned()
            .or_else(|| self.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Resolve and parse the remote base URL.
    ///
    /// # Errors
    ///
    /// Fails if no base URL is configured or it does not parse.
    pub fn base_url(&self, cli_base_url: Option<&str>) -> Result<Url> {
        let Some(raw) = cli_base_url.or(self.base_url.as_deref()) else {
            bail!(
                "no base URL configured; pass --base-url or set base_url in {}",
                Self::config_path().display()
            );
        };
        Url::parse(raw).with_context(|| format!("invalid base URL: {raw}"))
    }
}
