//! Application configuration loaded from a TOML file.
//!
//! Every field has a default so SFM works without a config file. The
//! default location is `<config dir>/sfm/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::fs::listing::LocalLister;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(path, e))?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Loads `path`, treating a missing file as "all defaults".
    ///
    /// # Errors
    ///
    /// Any error other than [`CoreError::NotFound`].
    pub fn load_or_default(path: &Path) -> CoreResult<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(CoreError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("sfm").join("config.toml"))
    }

    /// Builds the [`LocalLister`] described by the `[general]` section.
    pub fn lister(&self) -> LocalLister {
        LocalLister::new(self.general.show_hidden, self.general.dirs_first)
    }
}

/// General file-browsing preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Directory opened at startup. Falls back to the home directory.
    #[serde(default)]
    pub start_dir: Option<PathBuf>,
    #[serde(default)]
    pub show_hidden: bool,
    #[serde(default = "default_true")]
    pub dirs_first: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            start_dir: None,
            show_hidden: false,
            dirs_first: true,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `"info"` or `"sfm_core=debug"`.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to `<cache dir>/sfm/sfm.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LogConfig {
    /// The log file to write to, falling back to the temp directory.
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("sfm")
                .join("sfm.log")
        })
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
