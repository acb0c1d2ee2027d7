//! Window backed by the controlling terminal.
//!
//! The terminal is switched to raw mode and the alternate screen on creation
//! and restored when the window is dropped. Extents are measured in cells.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    self as ct, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use samplehost_core::{
    Extent, InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind, Result, Window, WindowEvent, WindowProperties,
};

/// Longest a poll waits for the first event of a frame. Paces the run-loop
/// at roughly 60 frames per second, since a terminal has no vsync.
const FRAME_TIMEOUT: Duration = Duration::from_millis(16);

/// The terminal as a window.
pub struct TerminalWindow {
    stdout: Stdout,
    properties: WindowProperties,
    extent: Extent,
    should_close: bool,
    in_raw_mode: bool,
    in_alternate_screen: bool,
}

impl TerminalWindow {
    /// Takes over the terminal.
    pub fn new(properties: WindowProperties) -> Result<Self> {
        let mut window = Self {
            stdout: io::stdout(),
            properties,
            extent: Extent::default(),
            should_close: false,
            in_raw_mode: false,
            in_alternate_screen: false,
        };

        enable_raw_mode()?;
        window.in_raw_mode = true;
        execute!(
            window.stdout,
            EnterAlternateScreen,
            EnableFocusChange,
            EnableMouseCapture,
            Hide
        )?;
        window.in_alternate_screen = true;

        if !window.properties.title.is_empty() {
            execute!(window.stdout, SetTitle(&window.properties.title))?;
        }

        window.extent = Self::measure()?;
        tracing::debug!("Created terminal window ({})", window.extent);
        Ok(window)
    }

    fn measure() -> Result<Extent> {
        let (columns, rows) = crossterm::terminal::size()?;
        Ok(Extent::new(u32::from(columns), u32::from(rows)))
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.in_alternate_screen {
            execute!(
                self.stdout,
                Show,
                DisableMouseCapture,
                DisableFocusChange,
                LeaveAlternateScreen
            )?;
            self.in_alternate_screen = false;
        }
        if self.in_raw_mode {
            disable_raw_mode()?;
            self.in_raw_mode = false;
        }
        Ok(())
    }
}

impl Window for TerminalWindow {
    fn properties(&self) -> &WindowProperties {
        &self.properties
    }

    fn extent(&self) -> Extent {
        self.extent
    }

    /// The user sizes the terminal, so a host resize only re-reads the size.
    /// The requested extent is in pixel-scale units and never sent to the
    /// terminal.
    fn resize(&mut self, requested: Extent) -> Extent {
        self.extent = granted_extent(self.extent, crossterm::terminal::size());
        tracing::trace!("Resize to {} granted as {}", requested, self.extent);
        self.extent
    }

    fn close(&mut self) {
        self.should_close = true;
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn process_events(&mut self) -> Result<Vec<WindowEvent>> {
        let mut events = Vec::new();
        let mut timeout = FRAME_TIMEOUT;

        while ct::poll(timeout)? {
            timeout = Duration::ZERO;
            let event = ct::read()?;
            if let ct::Event::Key(key) = &event {
                if key_event(key).is_ctrl_char('c') {
                    tracing::debug!("Ctrl+C pressed, closing");
                    self.should_close = true;
                    continue;
                }
            }
            if let ct::Event::Resize(columns, rows) = event {
                self.extent = Extent::new(u32::from(columns), u32::from(rows));
            }
            if let Some(event) = window_event(event) {
                events.push(event);
            }
        }

        Ok(events)
    }
}

impl Drop for TerminalWindow {
    fn drop(&mut self) {
        // Best-effort cleanup on drop
        let _ = self.restore();
    }
}

/// Size the terminal reports, or `current` when it cannot be read.
fn granted_extent(current: Extent, measured: io::Result<(u16, u16)>) -> Extent {
    match measured {
        Ok((columns, rows)) => Extent::new(u32::from(columns), u32::from(rows)),
        Err(e) => {
            tracing::debug!("Failed to measure terminal: {}", e);
            current
        }
    }
}

fn window_event(event: ct::Event) -> Option<WindowEvent> {
    match event {
        ct::Event::Key(key) => Some(WindowEvent::Input(InputEvent::Key(key_event(&key)))),
        ct::Event::Mouse(mouse) => mouse_event(&mouse).map(|m| WindowEvent::Input(m.into())),
        ct::Event::Resize(columns, rows) => Some(WindowEvent::Resize {
            width: u32::from(columns),
            height: u32::from(rows),
        }),
        ct::Event::FocusGained => Some(WindowEvent::Focus(true)),
        ct::Event::FocusLost => Some(WindowEvent::Focus(false)),
        ct::Event::Paste(_) => None,
    }
}

fn key_event(key: &ct::KeyEvent) -> KeyEvent {
    let code = match key.code {
        ct::KeyCode::Backspace => KeyCode::Backspace,
        ct::KeyCode::Enter => KeyCode::Enter,
        ct::KeyCode::Left => KeyCode::Left,
        ct::KeyCode::Right => KeyCode::Right,
        ct::KeyCode::Up => KeyCode::Up,
        ct::KeyCode::Down => KeyCode::Down,
        ct::KeyCode::Home => KeyCode::Home,
        ct::KeyCode::End => KeyCode::End,
        ct::KeyCode::PageUp => KeyCode::PageUp,
        ct::KeyCode::PageDown => KeyCode::PageDown,
        ct::KeyCode::Tab | ct::KeyCode::BackTab => KeyCode::Tab,
        ct::KeyCode::Delete => KeyCode::Delete,
        ct::KeyCode::Insert => KeyCode::Insert,
        ct::KeyCode::F(n) => KeyCode::F(n),
        ct::KeyCode::Char(c) => KeyCode::Char(c),
        ct::KeyCode::Esc => KeyCode::Esc,
        _ => KeyCode::Unknown,
    };
    let kind = match key.kind {
        ct::KeyEventKind::Press => KeyEventKind::Press,
        ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
        ct::KeyEventKind::Release => KeyEventKind::Release,
    };
    KeyEvent::with_kind(code, modifiers(key.modifiers), kind)
}

fn modifiers(mods: ct::KeyModifiers) -> KeyModifiers {
    let mut result = KeyModifiers::NONE;
    if mods.contains(ct::KeyModifiers::SHIFT) {
        result |= KeyModifiers::SHIFT;
    }
    if mods.contains(ct::KeyModifiers::CONTROL) {
        result |= KeyModifiers::CONTROL;
    }
    if mods.contains(ct::KeyModifiers::ALT) {
        result |= KeyModifiers::ALT;
    }
    if mods.contains(ct::KeyModifiers::SUPER) {
        result |= KeyModifiers::SUPER;
    }
    result
}

fn mouse_button(button: ct::MouseButton) -> MouseButton {
    match button {
        ct::MouseButton::Left => MouseButton::Left,
        ct::MouseButton::Right => MouseButton::Right,
        ct::MouseButton::Middle => MouseButton::Middle,
    }
}

fn mouse_event(mouse: &ct::MouseEvent) -> Option<MouseEvent> {
    let kind = match mouse.kind {
        ct::MouseEventKind::Down(button) => MouseEventKind::Down(mouse_button(button)),
        ct::MouseEventKind::Up(button) => MouseEventKind::Up(mouse_button(button)),
        ct::MouseEventKind::Drag(button) => MouseEventKind::Drag(mouse_button(button)),
        ct::MouseEventKind::Moved => MouseEventKind::Moved,
        ct::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
        ct::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
        ct::MouseEventKind::ScrollLeft | ct::MouseEventKind::ScrollRight => return None,
    };
    Some(MouseEvent {
        kind,
        x: u32::from(mouse.column),
        y: u32::from(mouse.row),
        modifiers: modifiers(mouse.modifiers),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_conversion() {
        let key = ct::KeyEvent::new(ct::KeyCode::Char('c'), ct::KeyModifiers::CONTROL);
        let converted = key_event(&key);
        assert_eq!(converted.code, KeyCode::Char('c'));
        assert!(converted.is_ctrl_char('c'));
        assert_eq!(converted.kind, KeyEventKind::Press);
    }

    #[test]
    fn test_escape_is_exit_request() {
        let key = ct::KeyEvent::new(ct::KeyCode::Esc, ct::KeyModifiers::NONE);
        let Some(WindowEvent::Input(event)) = window_event(ct::Event::Key(key)) else {
            panic!("expected an input event");
        };
        assert!(event.is_exit_request());
    }

    #[test]
    fn test_resize_and_focus_conversion() {
        assert_eq!(
            window_event(ct::Event::Resize(80, 24)),
            Some(WindowEvent::Resize {
                width: 80,
                height: 24
            })
        );
        assert_eq!(
            window_event(ct::Event::FocusLost),
            Some(WindowEvent::Focus(false))
        );
        assert_eq!(window_event(ct::Event::Paste("x".into())), None);
    }

    #[test]
    fn test_granted_extent_is_measured_cells() {
        // A clamped host request must not grow an 80x24 terminal.
        let granted = granted_extent(Extent::new(80, 24), Ok((80, 24)));
        assert_eq!(granted, Extent::new(80, 24));
        assert_ne!(granted, Extent::new(420, 320));

        let resized = granted_extent(Extent::new(80, 24), Ok((120, 40)));
        assert_eq!(resized, Extent::new(120, 40));
    }

    #[test]
    fn test_granted_extent_keeps_current_when_unmeasurable() {
        let failed = Err(io::Error::other("not a tty"));
        assert_eq!(granted_extent(Extent::new(80, 24), failed), Extent::new(80, 24));
    }

    #[test]
    fn test_horizontal_scroll_is_dropped() {
        let mouse = ct::MouseEvent {
            kind: ct::MouseEventKind::ScrollLeft,
            column: 1,
            row: 2,
            modifiers: ct::KeyModifiers::NONE,
        };
        assert_eq!(mouse_event(&mouse), None);
    }

    #[test]
    fn test_mouse_conversion() {
        let mouse = ct::MouseEvent {
            kind: ct::MouseEventKind::Down(ct::MouseButton::Right),
            column: 3,
            row: 4,
            modifiers: ct::KeyModifiers::SHIFT,
        };
        let converted = mouse_event(&mouse).unwrap();
        assert_eq!(converted.kind, MouseEventKind::Down(MouseButton::Right));
        assert_eq!((converted.x, converted.y), (3, 4));
        assert_eq!(converted.modifiers, KeyModifiers::SHIFT);
    }
}
