//! Error types for the selecta demo host.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the demo host.
#[derive(Error, Debug)]
pub enum AppError {
    /// Config file could not be read
    #[error("Failed to read config {path:?}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for this format
    #[error("Failed to parse config: {0}")]
    ParseConfig(#[from] serde_json::Error),

    /// Config written by a newer version
    #[error("Config file version {file_version} is newer than supported version {supported_version}")]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// Options in the config are unusable
    #[error("Invalid dropdown options: {0}")]
    Options(#[from] selecta_ui::ConfigError),

    /// Terminal I/O failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors in a command line typed at the prompt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0:?} (try 'help')")]
    Unknown(String),

    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("No dropdown number {0:?}; use 1, 2 or 3")]
    BadSlot(String),
}
