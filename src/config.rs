//! Configuration file support for the selecta demo.
//!
//! The configuration is a JSON document supplying the option list, the
//! simulated search delay, the log level and optional text overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use selecta_ui::demos::{sample_options, DemoSettings};
use selecta_ui::{DropdownTexts, SelectOption};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Current configuration file format version.
pub const CONFIG_VERSION: u32 = 1;

/// Default simulated network delay of the async dropdown.
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 1000;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Demo configuration that can be loaded from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Options offered by every dropdown
    #[serde(default = "sample_options")]
    pub options: Vec<SelectOption>,

    /// Simulated network delay for the async dropdown, in milliseconds
    #[serde(default = "default_search_delay_ms")]
    pub search_delay_ms: u64,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Text overrides; missing fields keep their defaults
    #[serde(default)]
    pub texts: DropdownTexts,
}

fn default_search_delay_ms() -> u64 {
    DEFAULT_SEARCH_DELAY_MS
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            options: sample_options(),
            search_delay_ms: DEFAULT_SEARCH_DELAY_MS,
            log_level: LogLevel::default(),
            texts: DropdownTexts::default(),
        }
    }
}

impl DemoConfig {
    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(AppError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "selecta-config.json"
    }

    /// Get the default config file path.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("selecta").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home| home.join(".config").join("selecta").join(Self::default_filename()))
        }
    }

    /// Load from an explicit path; a missing file is an error.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path).map_err(|source| AppError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from the default path, falling back to defaults when there is no
    /// file or it cannot be parsed.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded configuration from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Config for an optional command-line path. A path that does not exist
    /// falls back to defaults; without a path the default location is used.
    pub fn resolve(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            Some(path) => {
                log::warn!("No config file at {:?}, using defaults", path);
                Ok(Self::default())
            }
            None => Ok(Self::load_or_default()),
        }
    }

    /// Settings for building the demo dropdowns.
    pub fn demo_settings(&self) -> DemoSettings {
        DemoSettings {
            options: self.options.clone(),
            search_delay: Duration::from_millis(self.search_delay_ms),
            texts: self.texts.clone(),
        }
    }
}
