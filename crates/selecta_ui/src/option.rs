//! Selectable options and the filtering rule applied to them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A selectable item: a unique `value` and the `label` shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    /// Unique identifier, also used as the list key
    pub value: String,
    /// Display text
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Case-insensitive substring match against the label.
    ///
    /// `needle` must already be lowercased.
    fn label_contains(&self, needle: &str) -> bool {
        self.label.to_lowercase().contains(needle)
    }
}

/// Check that every option has a non-empty value and that values are unique.
pub fn validate_options(options: &[SelectOption]) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(options.len());
    for option in options {
        if option.value.is_empty() {
            return Err(ConfigError::EmptyValue {
                label: option.label.clone(),
            });
        }
        if !seen.insert(option.value.as_str()) {
            return Err(ConfigError::DuplicateValue {
                value: option.value.clone(),
            });
        }
    }
    Ok(())
}

/// Local filter: options whose label contains `query`, ignoring case.
///
/// Order of `options` is preserved. An empty query returns everything.
pub fn filter_options(options: &[SelectOption], query: &str) -> Vec<SelectOption> {
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|option| option.label_contains(&needle))
        .cloned()
        .collect()
}
