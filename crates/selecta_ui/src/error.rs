//! Error types for dropdown construction and search.

use thiserror::Error;

/// Errors raised while building a dropdown from host configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Two options share the same `value`, which makes selection and keying ambiguous
    #[error("Duplicate option value: {value:?}")]
    DuplicateValue {
        /// The repeated value
        value: String,
    },

    /// An option was given an empty `value`
    #[error("Option with label {label:?} has an empty value")]
    EmptyValue {
        /// Label of the offending option
        label: String,
    },

    /// The runtime that drives remote searches could not be started
    #[error("Failed to start search runtime: {message}")]
    SearchRuntime {
        /// Underlying I/O error
        message: String,
    },
}

/// Errors a search function can resolve with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The collaborator failed to produce results
    #[error("Search failed: {message}")]
    Failed {
        /// Description of the failure
        message: String,
    },

    /// The collaborator dropped the request without answering
    #[error("Search was cancelled")]
    Cancelled,
}

impl SearchError {
    /// Create a [`SearchError::Failed`] from any displayable message.
    pub fn failed(message: impl Into<String>) -> Self {
        SearchError::Failed {
            message: message.into(),
        }
    }
}

impl From<futures::channel::oneshot::Canceled> for SearchError {
    fn from(_: futures::channel::oneshot::Canceled) -> Self {
        SearchError::Cancelled
    }
}
