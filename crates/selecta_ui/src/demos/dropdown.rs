//! Dropdown widget demo: three independent instances side by side.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;
use std::time::Duration;

use crate::constants::DEFAULT_WIDTH;
use crate::demos::simulated::simulated_search;
use crate::error::ConfigError;
use crate::event::{Event, MouseButton};
use crate::layout::Point;
use crate::option::SelectOption;
use crate::outside::OutsideClickRegistry;
use crate::render::{Rendered, Span};
use crate::view::TextRenderer;
use crate::widgets::{Dropdown, DropdownTexts};

/// Horizontal gap between the demo columns
const COLUMN_GAP: f32 = 40.0;

/// Which of the three demo dropdowns a message targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoSlot {
    /// Default label rendering and local filtering
    Plain,
    /// Filtering delegated to a simulated remote search
    Async,
    /// Labels rendered bold by a custom renderer
    Custom,
}

impl DemoSlot {
    pub fn all() -> &'static [DemoSlot] {
        &[DemoSlot::Plain, DemoSlot::Async, DemoSlot::Custom]
    }

    pub fn title(&self) -> &'static str {
        match self {
            DemoSlot::Plain => "Simple variant",
            DemoSlot::Async => "Async search",
            DemoSlot::Custom => "Custom styles and list items",
        }
    }

    fn index(&self) -> usize {
        match self {
            DemoSlot::Plain => 0,
            DemoSlot::Async => 1,
            DemoSlot::Custom => 2,
        }
    }

    /// Slot from a 1-based column number.
    pub fn from_number(number: usize) -> Option<DemoSlot> {
        DemoSlot::all().get(number.checked_sub(1)?).copied()
    }
}

/// Dropdown demo messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownMessage {
    /// Keyboard focus moved onto a trigger (tab navigation)
    Focus(DemoSlot),
    /// Pointer click on a trigger
    Click(DemoSlot),
    /// Search input content replaced
    Search(DemoSlot, String),
    /// Pointer click on the result row with this value
    Pick(DemoSlot, String),
    /// Pointer press somewhere on the page outside every dropdown
    PointerOutside,
    /// Rebuild all dropdowns from scratch
    Reset,
}

/// Inputs for building the demo.
#[derive(Debug, Clone)]
pub struct DemoSettings {
    pub options: Vec<SelectOption>,
    pub search_delay: Duration,
    pub texts: DropdownTexts,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            options: sample_options(),
            search_delay: Duration::from_millis(1000),
            texts: DropdownTexts::default(),
        }
    }
}

/// The option list shown by every demo dropdown.
pub fn sample_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("option1", "Option 1"),
        SelectOption::new("option2", "Option 2"),
        SelectOption::new("option3", "Option 3"),
    ]
}

/// Confirmed selections, in the order they happened.
pub type SelectionLog = Rc<RefCell<Vec<(DemoSlot, SelectOption)>>>;

/// Dropdown demo state
pub struct DropdownDemo {
    settings: DemoSettings,
    registry: OutsideClickRegistry,
    dropdowns: Vec<Dropdown>,
    selections: SelectionLog,
}

impl DropdownDemo {
    pub fn new(settings: DemoSettings) -> Result<Self, ConfigError> {
        let registry = OutsideClickRegistry::new();
        let selections = SelectionLog::default();
        let dropdowns = Self::build_dropdowns(&settings, &registry, &selections)?;
        Ok(Self {
            settings,
            registry,
            dropdowns,
            selections,
        })
    }

    fn build_dropdowns(
        settings: &DemoSettings,
        registry: &OutsideClickRegistry,
        selections: &SelectionLog,
    ) -> Result<Vec<Dropdown>, ConfigError> {
        let mut dropdowns = Vec::with_capacity(DemoSlot::all().len());

        for &slot in DemoSlot::all() {
            let log_sink = Rc::clone(selections);
            let origin = Point::new(slot.index() as f32 * (DEFAULT_WIDTH + COLUMN_GAP), 0.0);

            let mut builder = Dropdown::builder(settings.options.clone())
                .texts(settings.texts.clone())
                .origin(origin)
                .on_select(move |option| {
                    log::info!("Selected: {} ({})", option.label, option.value);
                    log_sink.borrow_mut().push((slot, option.clone()));
                });

            builder = match slot {
                DemoSlot::Plain => builder,
                DemoSlot::Async => {
                    let delay = settings.search_delay;
                    builder.search_function(simulated_search(settings.options.clone(), move |_| delay))
                }
                DemoSlot::Custom => builder
                    .class_name("custom-class")
                    .custom_renderer(|option| Rendered::new(vec![Span::bold(option.label.clone())])),
            };

            let mut dropdown = builder.build()?;
            dropdown.mount(registry);
            dropdowns.push(dropdown);
        }

        Ok(dropdowns)
    }

    pub fn dropdown(&self, slot: DemoSlot) -> &Dropdown {
        &self.dropdowns[slot.index()]
    }

    fn dropdown_mut(&mut self, slot: DemoSlot) -> &mut Dropdown {
        &mut self.dropdowns[slot.index()]
    }

    /// Selections made so far
    pub fn selections(&self) -> Vec<(DemoSlot, SelectOption)> {
        self.selections.borrow().clone()
    }

    /// Live outside-click listeners (one per mounted dropdown)
    pub fn listeners(&self) -> usize {
        self.registry.len()
    }

    /// Total remote searches still outstanding
    pub fn pending_searches(&self) -> usize {
        self.dropdowns.iter().map(Dropdown::pending_searches).sum()
    }

    /// Deliver a pointer click at `point` to the whole page: the press and
    /// release reach every dropdown, focus lands on the one under the pointer.
    fn click_at(&mut self, point: Point) {
        let press = Event::MousePressed {
            button: MouseButton::Left,
            position: point,
        };
        let release = Event::MouseReleased {
            button: MouseButton::Left,
            position: point,
        };

        for dropdown in &mut self.dropdowns {
            dropdown.on_event(&press);
        }
        for dropdown in &mut self.dropdowns {
            let focus = if dropdown.is_inside(point) {
                Event::FocusGained { position: point }
            } else {
                Event::FocusLost
            };
            dropdown.on_event(&focus);
        }
        for dropdown in &mut self.dropdowns {
            dropdown.on_event(&release);
        }
    }

    /// A point right of every dropdown
    fn outside_point(&self) -> Point {
        let right = self
            .dropdowns
            .iter()
            .map(|d| {
                let outer = d.layout().outer();
                outer.x + outer.width
            })
            .fold(0.0_f32, f32::max);
        Point::new(right + COLUMN_GAP, 0.0)
    }

    pub fn update(&mut self, message: DropdownMessage) {
        match message {
            DropdownMessage::Focus(slot) => {
                let trigger = self.dropdown(slot).layout().trigger;
                let point = Point::new(trigger.x + 1.0, trigger.y + 1.0);
                for (i, dropdown) in self.dropdowns.iter_mut().enumerate() {
                    if i == slot.index() {
                        dropdown.on_event(&Event::FocusGained { position: point });
                    } else {
                        dropdown.on_event(&Event::FocusLost);
                    }
                }
            }
            DropdownMessage::Click(slot) => {
                let trigger = self.dropdown(slot).layout().trigger;
                self.click_at(Point::new(trigger.x + 1.0, trigger.y + 1.0));
            }
            DropdownMessage::Search(slot, text) => {
                self.dropdown_mut(slot).set_search_text(text);
            }
            DropdownMessage::Pick(slot, value) => {
                let dropdown = self.dropdown(slot);
                let row = dropdown
                    .view()
                    .items()
                    .iter()
                    .position(|item| item.key == value)
                    .and_then(|index| dropdown.layout().items.get(index).copied());

                match row {
                    Some(row) => self.click_at(Point::new(row.x + 1.0, row.y + 1.0)),
                    None => log::warn!("{:?} is not visible in the {:?} dropdown", value, slot),
                }
            }
            DropdownMessage::PointerOutside => {
                let point = self.outside_point();
                self.click_at(point);
            }
            DropdownMessage::Reset => match Self::build_dropdowns(&self.settings, &self.registry, &self.selections) {
                Ok(dropdowns) => {
                    // Old dropdowns release their listeners when dropped
                    self.dropdowns = dropdowns;
                    self.selections.borrow_mut().clear();
                }
                Err(err) => log::error!("Failed to rebuild dropdowns, keeping the current ones: {}", err),
            },
        }
    }

    /// Apply every finished search without blocking.
    pub fn poll(&mut self) -> usize {
        self.dropdowns.iter_mut().map(Dropdown::poll_searches).sum()
    }

    /// Block until no search is outstanding.
    pub fn settle(&mut self) {
        for dropdown in &mut self.dropdowns {
            dropdown.settle();
        }
    }

    /// Draw all three columns, one after another.
    pub fn render(&self, renderer: &TextRenderer) -> String {
        let mut out = String::new();
        for &slot in DemoSlot::all() {
            let _ = writeln!(out, "{}. {}", slot.index() + 1, slot.title());
            out.push_str(&renderer.draw(&self.dropdown(slot).view()));
            out.push('\n');
        }
        out
    }
}
