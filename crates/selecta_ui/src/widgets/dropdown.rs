//! Searchable dropdown widget.
//!
//! The widget renders three zones: a trigger showing the current selection,
//! and, while open, a search input followed by either the result list or a
//! status line. State changes go through [`DropdownState::update`]; this
//! type wires the reducer to its collaborators:
//!
//! - search requests are started on the [`SearchBackend`] and parked in a
//!   [`SearchDriver`] until they finish,
//! - selections are reported to the `on_select` handler,
//! - raw pointer/keyboard input is hit-tested against the current
//!   [`DropdownLayout`] and translated into [`DropdownEvent`]s.
//!
//! The search and render capabilities are fixed when the widget is built.

use serde::{Deserialize, Serialize};

use crate::callback::Handler;
use crate::constants::{
    DEFAULT_LOADING_TEXT, DEFAULT_NO_RESULTS_TEXT, DEFAULT_PLACEHOLDER, DEFAULT_SEARCH_FAILED_TEXT,
    DEFAULT_SEARCH_PLACEHOLDER, DEFAULT_WIDTH,
};
use crate::error::ConfigError;
use crate::event::{Event, Key, MouseButton};
use crate::layout::{BodyKind, DropdownLayout, Point};
use crate::option::{validate_options, SelectOption};
use crate::outside::{OutsideClickGuard, OutsideClickRegistry};
use crate::render::{OptionRenderer, Rendered};
use crate::search::{SearchBackend, SearchDriver, SearchFuture};
use crate::state::{DropdownEvent, DropdownState, Effect, SearchStatus};
use crate::view::{DropdownView, ItemView, PanelBody, PanelView};
use crate::{builder_field, handler_setter, text_setter};

/// User-facing texts of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownTexts {
    /// Trigger text when nothing is selected
    pub placeholder: String,
    /// Placeholder of the search input
    pub search_placeholder: String,
    /// Status while a remote search is outstanding
    pub loading: String,
    /// Status when no option matches
    pub no_results: String,
    /// Status when the last remote search failed
    pub search_failed: String,
}

impl Default for DropdownTexts {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
            loading: DEFAULT_LOADING_TEXT.to_string(),
            no_results: DEFAULT_NO_RESULTS_TEXT.to_string(),
            search_failed: DEFAULT_SEARCH_FAILED_TEXT.to_string(),
        }
    }
}

/// Hit-test result for a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    Trigger,
    Search,
    Item(usize),
    Status,
    Outside,
}

/// Builder for [`Dropdown`].
pub struct DropdownBuilder {
    options: Vec<SelectOption>,
    on_select: Handler<SelectOption>,
    backend: SearchBackend,
    renderer: OptionRenderer,
    class_name: Option<String>,
    texts: DropdownTexts,
    width: f32,
    origin: Point,
}

impl DropdownBuilder {
    handler_setter!(on_select, SelectOption);

    builder_field!(width, f32);
    builder_field!(origin, Point);
    builder_field!(texts, DropdownTexts);

    text_setter!(placeholder, texts.placeholder);
    text_setter!(search_placeholder, texts.search_placeholder);
    text_setter!(loading_text, texts.loading);
    text_setter!(no_results_text, texts.no_results);
    text_setter!(search_failed_text, texts.search_failed);

    /// Delegate filtering to an async search function.
    pub fn search_function<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> SearchFuture + 'static,
    {
        self.backend = SearchBackend::remote(f);
        self
    }

    /// Render the trigger and every list item with `f` instead of the label.
    pub fn custom_renderer<F>(mut self, f: F) -> Self
    where
        F: Fn(&SelectOption) -> Rendered + 'static,
    {
        self.renderer = OptionRenderer::custom(f);
        self
    }

    /// Styling hook, passed through to the view.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Validate the options and create the widget.
    pub fn build(self) -> Result<Dropdown, ConfigError> {
        validate_options(&self.options)?;
        let driver = SearchDriver::new().map_err(|err| ConfigError::SearchRuntime {
            message: err.to_string(),
        })?;
        log::debug!(
            "Building dropdown: {} options, backend={:?}, renderer={:?}",
            self.options.len(),
            self.backend,
            self.renderer
        );

        Ok(Dropdown {
            state: DropdownState::new(&self.options),
            options: self.options,
            on_select: self.on_select,
            backend: self.backend,
            renderer: self.renderer,
            class_name: self.class_name,
            texts: self.texts,
            width: self.width,
            origin: self.origin,
            driver,
            listener: None,
            focus: None,
            pressed: None,
        })
    }
}

/// A searchable dropdown/select widget.
#[derive(Debug)]
pub struct Dropdown {
    options: Vec<SelectOption>,
    state: DropdownState,
    on_select: Handler<SelectOption>,
    backend: SearchBackend,
    renderer: OptionRenderer,
    class_name: Option<String>,
    texts: DropdownTexts,
    width: f32,
    origin: Point,
    driver: SearchDriver,
    /// Outside-press registration, held while mounted
    listener: Option<OutsideClickGuard>,
    /// Zone holding keyboard focus
    focus: Option<Zone>,
    /// Zone where the current left press started
    pressed: Option<Zone>,
}

impl Dropdown {
    /// Start building a dropdown over `options`.
    pub fn builder(options: Vec<SelectOption>) -> DropdownBuilder {
        DropdownBuilder {
            options,
            on_select: Handler::none(),
            backend: SearchBackend::Local,
            renderer: OptionRenderer::Label,
            class_name: None,
            texts: DropdownTexts::default(),
            width: DEFAULT_WIDTH,
            origin: Point::zero(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> &DropdownState {
        &self.state
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        self.state.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn filtered(&self) -> &[SelectOption] {
        &self.state.filtered
    }

    pub fn texts(&self) -> &DropdownTexts {
        &self.texts
    }

    /// Number of remote searches that have not finished yet
    pub fn pending_searches(&self) -> usize {
        self.driver.len()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start listening for outside pointer presses.
    pub fn mount(&mut self, registry: &OutsideClickRegistry) {
        if self.listener.is_none() {
            self.listener = Some(registry.register());
        }
    }

    /// Stop listening for outside pointer presses.
    pub fn unmount(&mut self) {
        self.listener = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.as_ref().is_some_and(OutsideClickGuard::is_active)
    }

    /// Move the widget so its trigger starts at `origin`.
    pub fn place(&mut self, origin: Point) {
        self.origin = origin;
    }

    // =========================================================================
    // State transitions
    // =========================================================================

    /// Run one event through the reducer and carry out its effect.
    pub fn dispatch(&mut self, event: DropdownEvent) {
        let effect = self.state.update(event, &self.options, self.backend.mode());

        match effect {
            Some(Effect::Search(request)) => {
                if let Some(future) = self.backend.start(&request) {
                    self.driver.push(request.seq, future);
                }
            }
            Some(Effect::Selected(option)) => {
                log::debug!("Selected {:?}", option.value);
                self.on_select.emit(&option);
            }
            None => {}
        }

        // Focus may only rest on rows that are still drawn
        match (self.focus, self.body_kind()) {
            (Some(Zone::Item(index)), Some(BodyKind::Items(count))) if index < count => {}
            (Some(Zone::Status), Some(BodyKind::Status)) => {}
            (Some(Zone::Item(_) | Zone::Status), _) | (Some(Zone::Search), None) => self.focus = None,
            _ => {}
        }
    }

    /// Replace the search input content.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.dispatch(DropdownEvent::SearchChanged(text.into()));
    }

    /// Swap in a new candidate set and re-apply the current search text.
    pub fn replace_options(&mut self, options: Vec<SelectOption>) -> Result<(), ConfigError> {
        validate_options(&options)?;
        self.options = options;
        self.dispatch(DropdownEvent::OptionsReplaced);
        Ok(())
    }

    /// Feed every finished search back into the reducer without blocking.
    /// Returns how many completions were processed.
    pub fn poll_searches(&mut self) -> usize {
        let done = self.driver.poll_ready();
        let count = done.len();
        for completion in done {
            self.dispatch(completion.into());
        }
        count
    }

    /// Block until the next search finishes and apply it.
    /// Returns `false` when nothing was pending.
    pub fn wait_for_search(&mut self) -> bool {
        match self.driver.wait_next() {
            Some(completion) => {
                self.dispatch(completion.into());
                true
            }
            None => false,
        }
    }

    /// Block until every outstanding search has finished.
    pub fn settle(&mut self) {
        while self.wait_for_search() {}
    }

    // =========================================================================
    // Layout and input
    // =========================================================================

    fn body_kind(&self) -> Option<BodyKind> {
        if !self.state.is_open {
            return None;
        }
        match self.state.status {
            SearchStatus::Fetching { .. } | SearchStatus::Failed { .. } => Some(BodyKind::Status),
            SearchStatus::Idle if self.state.filtered.is_empty() => Some(BodyKind::Status),
            SearchStatus::Idle => Some(BodyKind::Items(self.state.filtered.len())),
        }
    }

    /// Zones of the widget as currently drawn.
    pub fn layout(&self) -> DropdownLayout {
        DropdownLayout::compute(self.origin, self.width, self.body_kind())
    }

    /// Whether `point` falls on the trigger or the open panel.
    pub fn is_inside(&self, point: Point) -> bool {
        self.layout().outer().contains(point)
    }

    fn zone_at(&self, layout: &DropdownLayout, point: Point) -> Zone {
        if layout.trigger.contains(point) {
            Zone::Trigger
        } else if layout.search.is_some_and(|b| b.contains(point)) {
            Zone::Search
        } else if let Some(index) = layout.item_at(point) {
            Zone::Item(index)
        } else if layout.status.is_some_and(|b| b.contains(point)) {
            Zone::Status
        } else {
            Zone::Outside
        }
    }

    fn activate_item(&self, index: usize) -> Option<DropdownEvent> {
        self.state
            .filtered
            .get(index)
            .map(|option| DropdownEvent::OptionActivated(option.value.clone()))
    }

    /// Translate a raw input event and apply it.
    ///
    /// Returns the dropdown event that was dispatched, if any.
    pub fn on_event(&mut self, event: &Event) -> Option<DropdownEvent> {
        let layout = self.layout();

        let mapped = match event {
            Event::MousePressed { button, position } => {
                let zone = self.zone_at(&layout, *position);
                if *button == MouseButton::Left {
                    self.pressed = Some(zone);
                }
                match zone {
                    Zone::Outside => {
                        self.focus = None;
                        // Only a mounted widget hears presses outside itself
                        self.is_mounted().then_some(DropdownEvent::PointerDownOutside)
                    }
                    Zone::Trigger if *button == MouseButton::Left => Some(DropdownEvent::TriggerPointerDown),
                    _ => None,
                }
            }
            Event::MouseReleased {
                button: MouseButton::Left,
                position,
            } => {
                let zone = self.zone_at(&layout, *position);
                if self.pressed.take() != Some(zone) {
                    return None;
                }
                match zone {
                    Zone::Trigger => Some(DropdownEvent::TriggerClicked),
                    Zone::Item(index) => self.activate_item(index),
                    Zone::Search => {
                        self.focus = Some(Zone::Search);
                        None
                    }
                    Zone::Status | Zone::Outside => None,
                }
            }
            Event::MouseReleased { .. } => None,
            Event::FocusGained { position } => match self.zone_at(&layout, *position) {
                Zone::Outside => {
                    self.focus = None;
                    None
                }
                Zone::Trigger => {
                    self.focus = Some(Zone::Trigger);
                    Some(DropdownEvent::TriggerFocused)
                }
                zone => {
                    self.focus = Some(zone);
                    None
                }
            },
            Event::FocusLost => {
                self.focus = None;
                None
            }
            Event::KeyPressed { key, modifiers } => match (self.focus, key) {
                (Some(Zone::Item(index)), Key::Enter) => self.activate_item(index),
                (Some(Zone::Search), Key::Char(c)) if !modifiers.is_shortcut() => {
                    let mut text = self.state.search_text.clone();
                    text.push(*c);
                    Some(DropdownEvent::SearchChanged(text))
                }
                (Some(Zone::Search), Key::Backspace) if !self.state.search_text.is_empty() => {
                    let mut text = self.state.search_text.clone();
                    text.pop();
                    Some(DropdownEvent::SearchChanged(text))
                }
                _ => None,
            },
        };

        if let Some(ref event) = mapped {
            self.dispatch(event.clone());
        }
        mapped
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Build the display model for the current state.
    pub fn view(&self) -> DropdownView {
        let (trigger, is_placeholder) = match &self.state.selected {
            Some(option) => (self.renderer.render(option), false),
            None => (Rendered::text(self.texts.placeholder.as_str()), true),
        };

        let panel = self.state.is_open.then(|| {
            let body = match &self.state.status {
                SearchStatus::Fetching { .. } => PanelBody::Loading(self.texts.loading.clone()),
                SearchStatus::Failed { .. } => PanelBody::Failed(self.texts.search_failed.clone()),
                SearchStatus::Idle if self.state.filtered.is_empty() => {
                    PanelBody::Empty(self.texts.no_results.clone())
                }
                SearchStatus::Idle => PanelBody::Items(
                    self.state
                        .filtered
                        .iter()
                        .map(|option| ItemView {
                            key: option.value.clone(),
                            content: self.renderer.render(option),
                            selected: self.state.selected.as_ref() == Some(option),
                        })
                        .collect(),
                ),
            };
            PanelView {
                search_text: self.state.search_text.clone(),
                search_placeholder: self.texts.search_placeholder.clone(),
                body,
            }
        });

        DropdownView {
            class_name: self.class_name.clone(),
            trigger,
            is_placeholder,
            panel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::event::Modifiers;
    use crate::render::Span;
    use crate::search::SearchOutcome;
    use futures::channel::oneshot;
    use futures::FutureExt;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Selections = Rc<RefCell<Vec<SelectOption>>>;
    type Requests = Rc<RefCell<Vec<(String, oneshot::Sender<SearchOutcome>)>>>;

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("o1", "Option 1"),
            SelectOption::new("o2", "Option 2"),
            SelectOption::new("o3", "Option 3"),
        ]
    }

    fn recording(builder: DropdownBuilder) -> (DropdownBuilder, Selections) {
        let selections: Selections = Rc::default();
        let sink = Rc::clone(&selections);
        let builder = builder.on_select(move |option| sink.borrow_mut().push(option.clone()));
        (builder, selections)
    }

    /// Remote dropdown whose searches are answered by hand through `Requests`.
    fn manual_remote() -> (Dropdown, Requests, Selections) {
        let requests: Requests = Rc::default();
        let queue = Rc::clone(&requests);
        let (builder, selections) = recording(Dropdown::builder(options()));
        let dropdown = builder
            .search_function(move |query: &str| {
                let (tx, rx) = oneshot::channel();
                queue.borrow_mut().push((query.to_string(), tx));
                async move { rx.await.unwrap_or_else(|canceled| Err(canceled.into())) }.boxed_local()
            })
            .build()
            .expect("valid options");
        (dropdown, requests, selections)
    }

    fn answer(requests: &Requests, query: &str, outcome: SearchOutcome) {
        let index = requests
            .borrow()
            .iter()
            .position(|(q, _)| q == query)
            .expect("query was issued");
        let (_, tx) = requests.borrow_mut().remove(index);
        tx.send(outcome).expect("search still pending");
    }

    fn left_press(p: Point) -> Event {
        Event::MousePressed {
            button: MouseButton::Left,
            position: p,
        }
    }

    fn left_release(p: Point) -> Event {
        Event::MouseReleased {
            button: MouseButton::Left,
            position: p,
        }
    }

    fn key(key: Key) -> Event {
        Event::KeyPressed {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// Pointer press, focus and release on the same point, as a browser delivers a click.
    fn click(dropdown: &mut Dropdown, p: Point) {
        dropdown.on_event(&left_press(p));
        dropdown.on_event(&Event::FocusGained { position: p });
        dropdown.on_event(&left_release(p));
    }

    fn trigger_point(dropdown: &Dropdown) -> Point {
        let t = dropdown.layout().trigger;
        Point::new(t.x + 5.0, t.y + 5.0)
    }

    fn search_point(dropdown: &Dropdown) -> Point {
        let s = dropdown.layout().search.expect("panel is open");
        Point::new(s.x + 5.0, s.y + 5.0)
    }

    fn item_point(dropdown: &Dropdown, index: usize) -> Point {
        let row = dropdown.layout().items[index];
        Point::new(row.x + 5.0, row.y + 5.0)
    }

    fn type_text(dropdown: &mut Dropdown, text: &str) {
        for c in text.chars() {
            dropdown.on_event(&key(Key::Char(c)));
        }
    }

    #[test]
    fn test_build_rejects_duplicate_values() {
        let err = Dropdown::builder(vec![SelectOption::new("a", "A"), SelectOption::new("a", "B")])
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateValue { value: "a".into() });
    }

    #[test]
    fn test_end_to_end_local_selection() {
        let (builder, selections) = recording(Dropdown::builder(options()));
        let mut dropdown = builder.build().expect("valid options");
        assert_eq!(dropdown.view().trigger.plain_text(), DEFAULT_PLACEHOLDER);

        let trigger = trigger_point(&dropdown);
        click(&mut dropdown, trigger);
        assert!(dropdown.is_open());

        let search = search_point(&dropdown);
        click(&mut dropdown, search);
        type_text(&mut dropdown, "2");
        assert_eq!(dropdown.filtered(), &[SelectOption::new("o2", "Option 2")]);

        let item = item_point(&dropdown, 0);
        click(&mut dropdown, item);

        assert_eq!(*selections.borrow(), vec![SelectOption::new("o2", "Option 2")]);
        assert!(!dropdown.is_open());
        let view = dropdown.view();
        assert_eq!(view.trigger.plain_text(), "Option 2");
        assert!(!view.is_placeholder);
    }

    #[test]
    fn test_enter_on_focused_item_selects_once() {
        let (builder, selections) = recording(Dropdown::builder(options()));
        let mut dropdown = builder.build().expect("valid options");
        dropdown.dispatch(DropdownEvent::TriggerClicked);

        let item = item_point(&dropdown, 2);
        dropdown.on_event(&Event::FocusGained { position: item });
        dropdown.on_event(&key(Key::Enter));
        // Panel closed and focus dropped, so a second Enter does nothing
        dropdown.on_event(&key(Key::Enter));

        assert_eq!(*selections.borrow(), vec![SelectOption::new("o3", "Option 3")]);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_click_on_trigger_opens_and_closes() {
        let mut dropdown = Dropdown::builder(options()).build().expect("valid options");
        let trigger = trigger_point(&dropdown);

        click(&mut dropdown, trigger);
        assert!(dropdown.is_open());
        click(&mut dropdown, trigger);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_keyboard_focus_opens() {
        let mut dropdown = Dropdown::builder(options()).build().expect("valid options");
        let trigger = trigger_point(&dropdown);

        let mapped = dropdown.on_event(&Event::FocusGained { position: trigger });
        assert_eq!(mapped, Some(DropdownEvent::TriggerFocused));
        assert!(dropdown.is_open());
    }

    #[test]
    fn test_outside_press_closes_only_when_mounted() {
        let registry = OutsideClickRegistry::new();
        let mut dropdown = Dropdown::builder(options()).build().expect("valid options");
        dropdown.dispatch(DropdownEvent::TriggerClicked);

        let far = Point::new(1000.0, 1000.0);
        assert!(!dropdown.is_inside(far));

        // Not mounted: nobody is listening
        dropdown.on_event(&left_press(far));
        assert!(dropdown.is_open());

        dropdown.mount(&registry);
        assert_eq!(registry.len(), 1);
        let mapped = dropdown.on_event(&Event::MousePressed {
            button: MouseButton::Right,
            position: far,
        });
        assert_eq!(mapped, Some(DropdownEvent::PointerDownOutside));
        assert!(!dropdown.is_open());

        dropdown.unmount();
        assert!(registry.is_empty());
        assert!(!dropdown.is_mounted());
    }

    #[test]
    fn test_inside_press_keeps_panel_open() {
        let registry = OutsideClickRegistry::new();
        let mut dropdown = Dropdown::builder(options()).build().expect("valid options");
        dropdown.mount(&registry);
        dropdown.dispatch(DropdownEvent::TriggerClicked);

        let search = search_point(&dropdown);
        assert!(dropdown.is_inside(search));
        dropdown.on_event(&left_press(search));
        assert!(dropdown.is_open());
        let item = item_point(&dropdown, 1);
        dropdown.on_event(&left_press(item));
        assert!(dropdown.is_open());
    }

    #[test]
    fn test_dropping_widget_releases_listener() {
        let registry = OutsideClickRegistry::new();
        {
            let mut dropdown = Dropdown::builder(options()).build().expect("valid options");
            dropdown.mount(&registry);
            dropdown.mount(&registry);
            assert_eq!(registry.len(), 1);
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_backspace_edits_search() {
        let mut dropdown = Dropdown::builder(options()).build().expect("valid options");
        dropdown.dispatch(DropdownEvent::TriggerClicked);
        let search = search_point(&dropdown);
        click(&mut dropdown, search);

        type_text(&mut dropdown, "zz");
        assert!(dropdown.filtered().is_empty());
        assert_eq!(dropdown.view().status(), Some(DEFAULT_NO_RESULTS_TEXT));

        dropdown.on_event(&key(Key::Backspace));
        dropdown.on_event(&key(Key::Backspace));
        assert_eq!(dropdown.state().search_text, "");
        assert_eq!(dropdown.filtered(), options().as_slice());

        // Nothing left to delete
        assert!(dropdown.on_event(&key(Key::Backspace)).is_none());
    }

    #[test]
    fn test_shortcut_chars_do_not_type() {
        let mut dropdown = Dropdown::builder(options()).build().expect("valid options");
        dropdown.dispatch(DropdownEvent::TriggerClicked);
        let search = search_point(&dropdown);
        click(&mut dropdown, search);

        let mapped = dropdown.on_event(&Event::KeyPressed {
            key: Key::Char('a'),
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        });
        assert!(mapped.is_none());
        assert!(dropdown.state().search_text.is_empty());
    }

    #[test]
    fn test_remote_search_shows_loading_then_results() {
        let (mut dropdown, requests, _) = manual_remote();
        dropdown.dispatch(DropdownEvent::TriggerClicked);
        dropdown.set_search_text("opt");

        assert!(dropdown.state().is_fetching());
        assert_eq!(dropdown.view().status(), Some(DEFAULT_LOADING_TEXT));
        assert!(dropdown.view().items().is_empty());
        assert_eq!(dropdown.pending_searches(), 1);

        let results = vec![SelectOption::new("o3", "Option 3"), SelectOption::new("o1", "Option 1")];
        answer(&requests, "opt", Ok(results.clone()));
        assert_eq!(dropdown.poll_searches(), 1);

        assert_eq!(dropdown.filtered(), results.as_slice());
        let keys: Vec<_> = dropdown.view().items().iter().map(|i| i.key.clone()).collect();
        assert_eq!(keys, vec!["o3", "o1"]);
    }

    #[test]
    fn test_remote_stale_response_loses() {
        let (mut dropdown, requests, _) = manual_remote();
        dropdown.set_search_text("a");
        dropdown.set_search_text("b");
        assert_eq!(dropdown.pending_searches(), 2);

        let results_b = vec![SelectOption::new("o2", "Option 2")];
        answer(&requests, "b", Ok(results_b.clone()));
        dropdown.poll_searches();
        answer(&requests, "a", Ok(vec![SelectOption::new("o1", "Option 1")]));
        dropdown.poll_searches();

        assert_eq!(dropdown.filtered(), results_b.as_slice());
        assert!(!dropdown.state().is_fetching());
        assert_eq!(dropdown.pending_searches(), 0);
    }

    #[test]
    fn test_remote_failure_shows_failed_status() {
        let (mut dropdown, requests, _) = manual_remote();
        dropdown.dispatch(DropdownEvent::TriggerClicked);
        dropdown.set_search_text("x");

        answer(&requests, "x", Err(SearchError::failed("timeout")));
        dropdown.poll_searches();

        assert!(!dropdown.state().is_fetching());
        assert_eq!(dropdown.view().status(), Some(DEFAULT_SEARCH_FAILED_TEXT));
        assert_eq!(dropdown.filtered(), options().as_slice());
    }

    #[test]
    fn test_enter_while_loading_selects_nothing() {
        let (mut dropdown, requests, selections) = manual_remote();
        dropdown.dispatch(DropdownEvent::TriggerClicked);
        let p = item_point(&dropdown, 0);
        dropdown.on_event(&Event::FocusGained { position: p });

        dropdown.set_search_text("zz");
        assert!(dropdown.view().items().is_empty());
        assert!(dropdown.on_event(&key(Key::Enter)).is_none());
        assert!(selections.borrow().is_empty());

        // Results come back, but the focus left with the old rows
        answer(&requests, "zz", Ok(options()));
        dropdown.poll_searches();
        assert_eq!(dropdown.view().items().len(), 3);
        assert!(dropdown.on_event(&key(Key::Enter)).is_none());
        assert!(selections.borrow().is_empty());
        assert!(dropdown.is_open());
    }

    #[test]
    fn test_activation_after_failure_is_ignored() {
        let (mut dropdown, requests, selections) = manual_remote();
        dropdown.dispatch(DropdownEvent::TriggerClicked);
        dropdown.set_search_text("x");
        answer(&requests, "x", Err(SearchError::failed("timeout")));
        dropdown.poll_searches();

        dropdown.dispatch(DropdownEvent::OptionActivated("o1".into()));
        assert!(selections.borrow().is_empty());
        assert!(dropdown.selected().is_none());
        assert!(dropdown.is_open());
    }

    #[test]
    fn test_remote_dropped_search_does_not_hang() {
        let (mut dropdown, requests, _) = manual_remote();
        dropdown.set_search_text("x");
        requests.borrow_mut().clear();

        assert!(dropdown.wait_for_search());
        assert!(!dropdown.state().is_fetching());
        assert!(matches!(dropdown.state().status, SearchStatus::Failed { .. }));
        assert!(!dropdown.wait_for_search());
    }

    #[test]
    fn test_custom_renderer_applies_to_trigger_and_items() {
        let mut dropdown = Dropdown::builder(options())
            .custom_renderer(|option| Rendered::new(vec![Span::bold(option.label.clone())]))
            .class_name("custom-class")
            .build()
            .expect("valid options");

        dropdown.dispatch(DropdownEvent::TriggerClicked);
        let view = dropdown.view();
        assert_eq!(view.class_name.as_deref(), Some("custom-class"));
        assert_eq!(view.items()[0].content.spans, vec![Span::bold("Option 1")]);

        // Placeholder is never passed through the renderer
        assert_eq!(view.trigger, Rendered::text(DEFAULT_PLACEHOLDER));

        dropdown.dispatch(DropdownEvent::OptionActivated("o2".into()));
        let view = dropdown.view();
        assert_eq!(view.trigger.spans, vec![Span::bold("Option 2")]);
        assert!(view.panel.is_none());
    }

    #[test]
    fn test_selected_item_is_marked() {
        let mut dropdown = Dropdown::builder(options()).build().expect("valid options");
        dropdown.dispatch(DropdownEvent::OptionActivated("o1".into()));
        dropdown.dispatch(DropdownEvent::TriggerClicked);

        let marked: Vec<bool> = dropdown.view().items().iter().map(|i| i.selected).collect();
        assert_eq!(marked, vec![true, false, false]);
    }

    #[test]
    fn test_empty_options_show_no_results() {
        let mut dropdown = Dropdown::builder(Vec::new())
            .no_results_text("Nothing here")
            .build()
            .expect("empty list is valid");
        dropdown.dispatch(DropdownEvent::TriggerClicked);
        assert_eq!(dropdown.view().status(), Some("Nothing here"));
        assert!(dropdown.layout().status.is_some());
    }

    #[test]
    fn test_replace_options_refilters() {
        let mut dropdown = Dropdown::builder(options()).build().expect("valid options");
        dropdown.set_search_text("lviv");
        assert!(dropdown.filtered().is_empty());

        dropdown
            .replace_options(vec![SelectOption::new("lviv", "Lviv"), SelectOption::new("kyiv", "Kyiv")])
            .expect("valid options");
        assert_eq!(dropdown.filtered(), &[SelectOption::new("lviv", "Lviv")]);

        let err = dropdown.replace_options(vec![SelectOption::new("x", "X"), SelectOption::new("x", "Y")]);
        assert!(err.is_err());
        assert_eq!(dropdown.options().len(), 2);
    }

    #[test]
    fn test_independent_instances() {
        let mut a = Dropdown::builder(options()).build().expect("valid options");
        let b = Dropdown::builder(options()).build().expect("valid options");
        a.dispatch(DropdownEvent::TriggerClicked);
        a.set_search_text("3");
        assert!(a.is_open());
        assert!(!b.is_open());
        assert_eq!(b.filtered().len(), 3);
    }
}
