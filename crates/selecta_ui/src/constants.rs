//! Centralized constants for selecta_ui
//!
//! Row geometry and the default user-facing texts live here.

// =============================================================================
// Geometry
// =============================================================================

/// Height of the trigger/display row
pub const TRIGGER_HEIGHT: f32 = 24.0;

/// Height of the search input row
pub const SEARCH_ROW_HEIGHT: f32 = 24.0;

/// Height of a single result row
pub const ITEM_HEIGHT: f32 = 22.0;

/// Height of the loading / empty / failed status line
pub const STATUS_ROW_HEIGHT: f32 = 22.0;

/// Default dropdown width
pub const DEFAULT_WIDTH: f32 = 200.0;

// =============================================================================
// Texts
// =============================================================================

/// Trigger text when nothing is selected
pub const DEFAULT_PLACEHOLDER: &str = "Choose your city";

/// Placeholder of the search input
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search...";

/// Status shown while a remote search is outstanding
pub const DEFAULT_LOADING_TEXT: &str = "Searching...";

/// Status shown when there are no results
pub const DEFAULT_NO_RESULTS_TEXT: &str = "Nothing found";

/// Status shown when the last remote search failed
pub const DEFAULT_SEARCH_FAILED_TEXT: &str = "Search failed";
