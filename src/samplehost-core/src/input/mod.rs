//! Input events forwarded from the window to the platform.
//!
//! The platform inspects every event for the global exit keys and forwards it
//! to the active application when input processing is enabled.

mod keyboard;
mod mouse;

pub use keyboard::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
pub use mouse::{MouseButton, MouseEvent, MouseEventKind};

use std::fmt;

/// Which device produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSource {
    Keyboard,
    Mouse,
}

/// An input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
}

impl InputEvent {
    /// Returns the device that produced the event.
    #[must_use]
    pub fn source(&self) -> EventSource {
        match self {
            InputEvent::Key(_) => EventSource::Keyboard,
            InputEvent::Mouse(_) => EventSource::Mouse,
        }
    }

    /// Returns the key event if this is a `Key` variant.
    #[must_use]
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            InputEvent::Key(key) => Some(key),
            InputEvent::Mouse(_) => None,
        }
    }

    /// Returns true for a keyboard event carrying Escape or Back.
    #[must_use]
    pub fn is_exit_request(&self) -> bool {
        self.as_key().is_some_and(|key| key.code.is_exit_key())
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        InputEvent::Key(event)
    }
}

impl From<MouseEvent> for InputEvent {
    fn from(event: MouseEvent) -> Self {
        InputEvent::Mouse(event)
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEvent::Key(key) => write!(f, "key {key}"),
            InputEvent::Mouse(mouse) => write!(f, "mouse {mouse}"),
        }
    }
}
