//! Host-agnostic input events.
//!
//! Positions are in device space: pixels relative to the drawing surface's
//! displayed rectangle. The editor converts them to scene space.

use crate::types::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    /// Raw device movement since the previous pointer event
    pub movement: Point,
}

impl PointerEvent {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            movement: Point::ZERO,
        }
    }

    pub fn with_movement(mut self, dx: f64, dy: f64) -> Self {
        self.movement = Point::new(dx, dy);
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelEvent {
    pub delta_y: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Delete,
    Backspace,
    Character(char),
    Other(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    /// Command on macOS, Windows key elsewhere
    pub platform: bool,
}

impl Modifiers {
    /// Ctrl or Cmd, whichever the platform uses for shortcuts.
    pub fn command(&self) -> bool {
        self.control || self.platform
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn is_cancel(&self) -> bool {
        self.key == Key::Escape
    }

    pub fn is_delete(&self) -> bool {
        matches!(self.key, Key::Delete | Key::Backspace)
    }

    /// Whether this is the given letter, ignoring case.
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.key, Key::Character(k) if k.eq_ignore_ascii_case(&c))
    }
}
