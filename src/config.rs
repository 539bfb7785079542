//! Application configuration loaded from JSON.

use crate::export::DEFAULT_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "GRAPHIQ_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "graphiq.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Startup settings. Every field may be omitted from the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
    /// Ask for a location with a save dialog instead of writing to `export_dir`.
    #[serde(default)]
    pub ask_save_location: bool,
    #[serde(default)]
    pub open_after_export: bool,
    #[serde(default = "default_file_name")]
    pub default_file_name: String,
    /// `EnvFilter` directives; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default = "default_window_size")]
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            ask_save_location: false,
            open_after_export: false,
            default_file_name: default_file_name(),
            log_filter: default_log_filter(),
            window_size: default_window_size(),
        }
    }
}

impl AppConfig {
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_json_str(&text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load from `$GRAPHIQ_CONFIG`, falling back to `graphiq.json`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }
}

fn default_export_dir() -> PathBuf {
    PathBuf::from("exports")
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_window_size() -> [f32; 2] {
    [1400.0, 900.0]
}
