//! Dropdown state and the reducer that drives it.
//!
//! Every interaction is an explicit [`DropdownEvent`] fed through
//! [`DropdownState::update`]. The reducer never performs I/O: when a remote
//! search is needed it returns an [`Effect::Search`] and the host feeds the
//! answer back as [`DropdownEvent::SearchResolved`]. Each issued search is
//! tagged with a sequence number so that only the last issued query can
//! land in the result list.

use crate::error::SearchError;
use crate::option::{filter_options, SelectOption};

/// How search text is turned into results. Chosen once per widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Substring match on labels, computed synchronously
    #[default]
    Local,
    /// Delegated to a host-supplied async search function
    Remote,
}

/// Progress of the current search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// Nothing outstanding
    #[default]
    Idle,
    /// Waiting on the search with this sequence number
    Fetching { seq: u64 },
    /// The last search failed; previous results are kept
    Failed { message: String },
}

/// A search the host must run and answer with [`DropdownEvent::SearchResolved`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
}

/// Inputs to the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum DropdownEvent {
    /// Pointer pressed on the trigger area (arms the focus latch)
    TriggerPointerDown,
    /// Trigger area received focus
    TriggerFocused,
    /// Trigger area clicked
    TriggerClicked,
    /// Pointer pressed anywhere outside the widget
    PointerDownOutside,
    /// Search input content changed
    SearchChanged(String),
    /// An option in the result list was clicked or confirmed with Enter
    OptionActivated(String),
    /// A remote search finished
    SearchResolved {
        seq: u64,
        outcome: Result<Vec<SelectOption>, SearchError>,
    },
    /// The host replaced the candidate set
    OptionsReplaced,
}

/// Side effects requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run a remote search
    Search(SearchRequest),
    /// Report a confirmed selection to the host
    Selected(SelectOption),
}

/// State for a single dropdown instance
#[derive(Debug, Clone, Default)]
pub struct DropdownState {
    /// Whether the results panel is visible
    pub is_open: bool,
    /// Current selection, kept until another option is chosen
    pub selected: Option<SelectOption>,
    /// Search input content
    pub search_text: String,
    /// Results currently displayed
    pub filtered: Vec<SelectOption>,
    /// Remote search progress
    pub status: SearchStatus,
    /// Set by a pointer-down on the trigger so the focus that follows does not open
    pub(crate) suppress_focus_open: bool,
    /// Sequence number of the most recently issued search
    pub(crate) latest_seq: u64,
}

impl DropdownState {
    /// Create state for a freshly mounted widget: closed, nothing selected,
    /// every option visible.
    pub fn new(options: &[SelectOption]) -> Self {
        Self {
            filtered: options.to_vec(),
            ..Self::default()
        }
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close the panel. Search text and results are kept.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// True only while the latest issued search is outstanding
    pub fn is_fetching(&self) -> bool {
        matches!(self.status, SearchStatus::Fetching { .. })
    }

    /// Whether the focus latch is armed
    pub fn focus_open_suppressed(&self) -> bool {
        self.suppress_focus_open
    }

    /// Apply one event.
    ///
    /// `options` is the host's current candidate set and `mode` the widget's
    /// filter capability.
    pub fn update(
        &mut self,
        event: DropdownEvent,
        options: &[SelectOption],
        mode: FilterMode,
    ) -> Option<Effect> {
        match event {
            DropdownEvent::TriggerPointerDown => {
                self.suppress_focus_open = true;
                None
            }
            DropdownEvent::TriggerFocused => {
                if !self.suppress_focus_open {
                    self.open();
                }
                None
            }
            DropdownEvent::TriggerClicked => {
                self.suppress_focus_open = false;
                self.toggle();
                log::debug!("Dropdown toggled: is_open={}", self.is_open);
                None
            }
            DropdownEvent::PointerDownOutside => {
                self.close();
                None
            }
            DropdownEvent::SearchChanged(text) => {
                self.search_text = text;
                self.apply_search(options, mode)
            }
            DropdownEvent::OptionActivated(value) => self.activate(&value),
            DropdownEvent::SearchResolved { seq, outcome } => {
                self.resolve(seq, outcome);
                None
            }
            DropdownEvent::OptionsReplaced => self.apply_search(options, mode),
        }
    }

    /// Re-derive results from the current search text.
    fn apply_search(&mut self, options: &[SelectOption], mode: FilterMode) -> Option<Effect> {
        if self.search_text.is_empty() {
            // Invalidate anything still in flight
            if self.is_fetching() {
                self.latest_seq += 1;
            }
            self.filtered = options.to_vec();
            self.status = SearchStatus::Idle;
            return None;
        }

        match mode {
            FilterMode::Local => {
                self.filtered = filter_options(options, &self.search_text);
                self.status = SearchStatus::Idle;
                None
            }
            FilterMode::Remote => {
                self.latest_seq += 1;
                let seq = self.latest_seq;
                self.status = SearchStatus::Fetching { seq };
                log::debug!("Issuing search #{} for {:?}", seq, self.search_text);
                Some(Effect::Search(SearchRequest {
                    seq,
                    query: self.search_text.clone(),
                }))
            }
        }
    }

    fn resolve(&mut self, seq: u64, outcome: Result<Vec<SelectOption>, SearchError>) {
        let current = matches!(self.status, SearchStatus::Fetching { seq: s } if s == seq);
        if !current || seq != self.latest_seq {
            log::debug!("Dropping stale search #{} (latest is #{})", seq, self.latest_seq);
            return;
        }

        match outcome {
            Ok(results) => {
                log::debug!("Search #{} resolved with {} results", seq, results.len());
                self.filtered = results;
                self.status = SearchStatus::Idle;
            }
            Err(err) => {
                log::warn!("Search #{} for {:?} failed: {}", seq, self.search_text, err);
                self.status = SearchStatus::Failed {
                    message: err.to_string(),
                };
            }
        }
    }

    fn activate(&mut self, value: &str) -> Option<Effect> {
        // The list is only drawn while idle; a status line hides it otherwise
        if self.status != SearchStatus::Idle {
            log::warn!("Ignoring activation of {:?}: results are not displayed", value);
            return None;
        }
        let Some(option) = self.filtered.iter().find(|o| o.value == value).cloned() else {
            log::warn!("Ignoring activation of {:?}: not among displayed results", value);
            return None;
        };

        self.selected = Some(option.clone());
        self.close();
        Some(Effect::Selected(option))
    }
}
