//! selecta_ui - a searchable dropdown widget
//!
//! The widget is renderer-agnostic: input arrives as raw [`Event`]s or as
//! [`DropdownEvent`]s, state lives in a [`DropdownState`] driven by an
//! explicit reducer, and output is a [`DropdownView`] display model that a
//! host draws however it likes ([`TextRenderer`] draws it for a terminal).
//!
//! ```
//! use selecta_ui::prelude::*;
//!
//! let mut dropdown = Dropdown::builder(vec![
//!     SelectOption::new("o1", "Option 1"),
//!     SelectOption::new("o2", "Option 2"),
//! ])
//! .on_select(|option| println!("Selected: {}", option.label))
//! .build()?;
//!
//! dropdown.dispatch(DropdownEvent::TriggerClicked);
//! dropdown.set_search_text("2");
//! dropdown.dispatch(DropdownEvent::OptionActivated("o2".into()));
//! assert_eq!(dropdown.view().trigger.plain_text(), "Option 2");
//! # Ok::<(), selecta_ui::ConfigError>(())
//! ```

mod callback;
mod constants;
mod error;
mod event;
mod layout;
mod macros;
mod option;
mod outside;
mod render;
mod search;
mod state;
mod view;

pub mod demos;
pub mod widgets;

pub use callback::Handler;
pub use constants::*;
pub use error::{ConfigError, SearchError};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use layout::{BodyKind, Bounds, DropdownLayout, Point, Size};
pub use option::{filter_options, validate_options, SelectOption};
pub use outside::{OutsideClickGuard, OutsideClickRegistry};
pub use render::{OptionRenderer, Rendered, Span, SpanStyle};
pub use search::{Completion, SearchBackend, SearchDriver, SearchFn, SearchFuture, SearchOutcome};
pub use state::{DropdownEvent, DropdownState, Effect, FilterMode, SearchRequest, SearchStatus};
pub use view::{DropdownView, ItemView, PanelBody, PanelView, TextRenderer};
pub use widgets::{Dropdown, DropdownBuilder, DropdownTexts};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{ConfigError, SearchError};
    pub use crate::event::{Event, Key, Modifiers, MouseButton};
    pub use crate::layout::Point;
    pub use crate::option::SelectOption;
    pub use crate::outside::OutsideClickRegistry;
    pub use crate::render::{Rendered, Span};
    pub use crate::search::SearchFuture;
    pub use crate::state::{DropdownEvent, SearchStatus};
    pub use crate::view::{DropdownView, TextRenderer};
    pub use crate::widgets::{Dropdown, DropdownTexts};
}
