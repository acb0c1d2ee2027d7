//! Keyboard input types.

use bitflags::bitflags;
use std::fmt;

/// Represents the type of key event (press, release, or repeat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed down.
    #[default]
    Press,
    /// Key is being held down and repeating.
    Repeat,
    /// Key was released.
    Release,
}

impl fmt::Display for KeyEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyEventKind::Press => write!(f, "press"),
            KeyEventKind::Repeat => write!(f, "repeat"),
            KeyEventKind::Release => write!(f, "release"),
        }
    }
}

/// Represents a key on the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up key.
    PageUp,
    /// Page Down key.
    PageDown,
    /// Tab key.
    Tab,
    /// Delete key.
    Delete,
    /// Insert key.
    Insert,
    /// Function key F1-F24.
    F(u8),
    /// A regular character key.
    Char(char),
    /// Escape key.
    Esc,
    /// System back button (mobile hosts).
    Back,
    /// Any key the host does not model.
    Unknown,
}

impl KeyCode {
    /// Returns the normalized name for this key code.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Left => "left".to_string(),
            KeyCode::Right => "right".to_string(),
            KeyCode::Up => "up".to_string(),
            KeyCode::Down => "down".to_string(),
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::PageUp => "pageup".to_string(),
            KeyCode::PageDown => "pagedown".to_string(),
            KeyCode::Tab => "tab".to_string(),
            KeyCode::Delete => "delete".to_string(),
            KeyCode::Insert => "insert".to_string(),
            KeyCode::F(n) => format!("f{n}"),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Esc => "escape".to_string(),
            KeyCode::Back => "back".to_string(),
            KeyCode::Unknown => "unknown".to_string(),
        }
    }

    /// Returns true for keys that ask the host to close.
    #[must_use]
    pub fn is_exit_key(&self) -> bool {
        matches!(self, KeyCode::Esc | KeyCode::Back)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

bitflags! {
    /// Modifier keys held during an input event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        const NONE = 0b0000_0000;
        const SHIFT = 0b0000_0001;
        const CONTROL = 0b0000_0010;
        const ALT = 0b0000_0100;
        const SUPER = 0b0000_1000;
    }
}

impl fmt::Display for KeyModifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        if self.contains(KeyModifiers::SUPER) {
            parts.push("Super");
        }
        if parts.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key.
    pub code: KeyCode,
    /// Modifiers held at the time of the event.
    pub modifiers: KeyModifiers,
    /// Press, repeat or release.
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Creates a key press event.
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self {
            code,
            modifiers,
            kind: KeyEventKind::Press,
        }
    }

    /// Creates a key event with an explicit kind.
    #[must_use]
    pub fn with_kind(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Self {
        Self {
            code,
            modifiers,
            kind,
        }
    }

    /// Creates a press of a plain character key.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    /// Returns true if Control is held.
    #[must_use]
    pub fn ctrl(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Returns true if this is a Ctrl+`c` chord (case-insensitive).
    #[must_use]
    pub fn is_ctrl_char(&self, c: char) -> bool {
        match self.code {
            KeyCode::Char(key) => self.ctrl() && key.eq_ignore_ascii_case(&c),
            _ => false,
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{} ({})", self.code, self.kind)
        } else {
            write!(f, "{}+{} ({})", self.modifiers, self.code, self.kind)
        }
    }
}
