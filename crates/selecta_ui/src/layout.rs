//! Geometry and zone layout for the dropdown.

use crate::constants::{ITEM_HEIGHT, SEARCH_ROW_HEIGHT, STATUS_ROW_HEIGHT, TRIGGER_HEIGHT};

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment so that stacked rows never share an edge.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Bounds) -> Bounds {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = (self.x + self.width).max(other.x + other.width);
        let bottom = self.bottom().max(other.bottom());
        Bounds::new(x, y, right - x, bottom - y)
    }
}

/// What occupies the area below the search row when the panel is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// One row per result
    Items(usize),
    /// A single status line (loading, empty, failed)
    Status,
}

/// Resolved zones of a dropdown placed at a given origin.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownLayout {
    pub trigger: Bounds,
    /// Search input row, present only while open
    pub search: Option<Bounds>,
    /// Result rows, in display order
    pub items: Vec<Bounds>,
    /// Status line, present when open and not listing items
    pub status: Option<Bounds>,
}

impl DropdownLayout {
    /// Compute the zones for a dropdown of `width` whose trigger starts at `origin`.
    pub fn compute(origin: Point, width: f32, body: Option<BodyKind>) -> Self {
        let trigger = Bounds::new(origin.x, origin.y, width, TRIGGER_HEIGHT);

        let Some(body) = body else {
            return Self {
                trigger,
                search: None,
                items: Vec::new(),
                status: None,
            };
        };

        let search = Bounds::new(origin.x, trigger.bottom(), width, SEARCH_ROW_HEIGHT);
        let body_top = search.bottom();

        let (items, status) = match body {
            BodyKind::Items(count) => {
                let items = (0..count)
                    .map(|i| Bounds::new(origin.x, body_top + i as f32 * ITEM_HEIGHT, width, ITEM_HEIGHT))
                    .collect();
                (items, None)
            }
            BodyKind::Status => (
                Vec::new(),
                Some(Bounds::new(origin.x, body_top, width, STATUS_ROW_HEIGHT)),
            ),
        };

        Self {
            trigger,
            search: Some(search),
            items,
            status,
        }
    }

    /// Area covered by the whole widget: trigger plus open panel.
    pub fn outer(&self) -> Bounds {
        let mut outer = self.trigger;
        if let Some(search) = &self.search {
            outer = outer.union(search);
        }
        if let Some(last) = self.items.last() {
            outer = outer.union(last);
        }
        if let Some(status) = &self.status {
            outer = outer.union(status);
        }
        outer
    }

    /// Index of the result row under `point`.
    pub fn item_at(&self, point: Point) -> Option<usize> {
        self.items.iter().position(|row| row.contains(point))
    }

    pub fn size(&self) -> Size {
        self.outer().size()
    }
}
