//! Application configuration for bookmarklens.
//!
//! User config lives at `~/.bookmarklens/bookmarklens.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{BookmarkLensError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "bookmarklens.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".bookmarklens";

// ---------------------------------------------------------------------------
// Config structs (matching bookmarklens.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Retrieval settings.
    #[serde(default)]
    pub retrieval: RetrievalSection,

    /// Export settings.
    #[serde(default)]
    pub export: ExportConfig,
}

/// How fetched response bodies are turned into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyEncoding {
    /// Decode every body as UTF-8, replacing invalid sequences, whatever the server declares.
    #[default]
    #[serde(rename = "utf-8")]
    Utf8,
    /// Honour the `Content-Type` charset, falling back to UTF-8.
    #[serde(rename = "declared")]
    Declared,
}

impl std::str::FromStr for BodyEncoding {
    type Err = BookmarkLensError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "declared" => Ok(Self::Declared),
            other => Err(BookmarkLensError::validation(format!(
                "unknown body encoding '{other}': expected 'utf-8' or 'declared'"
            ))),
        }
    }
}

/// `[retrieval]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalSection {
    /// Maximum simultaneous page fetches.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Body decoding mode.
    #[serde(default)]
    pub encoding: BodyEncoding,

    /// Hosts that are never fetched (subdomains included).
    #[serde(default = "default_blocked_hosts")]
    pub blocked_hosts: Vec<String>,
}

impl Default for RetrievalSection {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            timeout_secs: default_timeout_secs(),
            encoding: BodyEncoding::default(),
            blocked_hosts: default_blocked_hosts(),
        }
    }
}

fn default_concurrency() -> usize {
    20
}
fn default_timeout_secs() -> u64 {
    4
}
fn default_blocked_hosts() -> Vec<String> {
    vec!["drive.google.com".into()]
}

/// `[export]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory both CSV files are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File name for bookmarks with both title and description.
    #[serde(default = "default_complete_file")]
    pub complete_file: String,

    /// File name for everything else.
    #[serde(default = "default_incomplete_file")]
    pub incomplete_file: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            complete_file: default_complete_file(),
            incomplete_file: default_incomplete_file(),
        }
    }
}

impl ExportConfig {
    /// Full path of the complete-partition file.
    pub fn complete_path(&self) -> PathBuf {
        self.output_dir.join(&self.complete_file)
    }

    /// Full path of the incomplete-partition file.
    pub fn incomplete_path(&self) -> PathBuf {
        self.output_dir.join(&self.incomplete_file)
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_complete_file() -> String {
    "bookmarks.csv".into()
}
fn default_incomplete_file() -> String {
    "bookmarks_failed.csv".into()
}

// ---------------------------------------------------------------------------
// Retrieval config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime retrieval configuration, merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct RetrievalConfig {
    /// Maximum concurrent fetches. Zero is treated as one.
    pub concurrency: usize,
    /// Hard per-request timeout.
    pub timeout: Duration,
    /// Body decoding mode.
    pub encoding: BodyEncoding,
    /// Blocked hosts.
    pub blocked_hosts: Vec<String>,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for RetrievalConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            concurrency: config.retrieval.concurrency,
            timeout: Duration::from_secs(config.retrieval.timeout_secs),
            encoding: config.retrieval.encoding,
            blocked_hosts: config.retrieval.blocked_hosts.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.bookmarklens/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| BookmarkLensError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.bookmarklens/bookmarklens.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| BookmarkLensError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        BookmarkLensError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| BookmarkLensError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let content = render_config(&AppConfig::default())?;

    std::fs::write(&path, content).map_err(|e| BookmarkLensError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Serialize a config back to TOML (used by `config show`).
pub fn render_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(config).map_err(|e| BookmarkLensError::config(e.to_string()))
}
