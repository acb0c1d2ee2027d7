//! Mouse input types.

use std::fmt;

use super::keyboard::KeyModifiers;

/// Represents a mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// Left mouse button (primary).
    #[default]
    Left,
    /// Right mouse button (secondary).
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MouseButton::Left => write!(f, "left"),
            MouseButton::Right => write!(f, "right"),
            MouseButton::Middle => write!(f, "middle"),
        }
    }
}

/// The kind of mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// A button was pressed down.
    Down(MouseButton),
    /// A button was released.
    Up(MouseButton),
    /// The mouse was dragged while a button was held.
    Drag(MouseButton),
    /// The mouse was moved without any buttons pressed.
    Moved,
    /// The scroll wheel was scrolled down.
    ScrollDown,
    /// The scroll wheel was scrolled up.
    ScrollUp,
}

/// A mouse event at a surface position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    /// What happened.
    pub kind: MouseEventKind,
    /// Column / x position.
    pub x: u32,
    /// Row / y position.
    pub y: u32,
    /// Modifiers held at the time of the event.
    pub modifiers: KeyModifiers,
}

impl MouseEvent {
    /// Creates a mouse event without modifiers.
    #[must_use]
    pub fn new(kind: MouseEventKind, x: u32, y: u32) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl fmt::Display for MouseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            MouseEventKind::Down(button) => format!("{button} down"),
            MouseEventKind::Up(button) => format!("{button} up"),
            MouseEventKind::Drag(button) => format!("{button} drag"),
            MouseEventKind::Moved => "moved".to_string(),
            MouseEventKind::ScrollDown => "scroll down".to_string(),
            MouseEventKind::ScrollUp => "scroll up".to_string(),
        };
        write!(f, "{kind} at ({}, {})", self.x, self.y)
    }
}
