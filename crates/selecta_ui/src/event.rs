use crate::layout::Point;

/// Raw input events delivered by the host environment.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Mouse button pressed.
    MousePressed {
        button: MouseButton,
        position: Point,
    },
    /// Mouse button released. A press followed by a release over the same
    /// zone is a click.
    MouseReleased {
        button: MouseButton,
        position: Point,
    },
    /// Keyboard focus moved to the zone under `position`.
    FocusGained { position: Point },
    /// Keyboard focus left the widget.
    FocusLost,
    /// Keyboard key pressed.
    KeyPressed { key: Key, modifiers: Modifiers },
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// Keyboard keys the dropdown reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
}

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// True when a shortcut modifier (ctrl/alt/meta) is held.
    pub fn is_shortcut(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}
