//! Terminal input mapping

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::keypad::KeyAction;

/// What a terminal event asks the calculator to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Trigger a keypad action directly
    Key(KeyAction),
    /// Enter: submit the display, or activate the focused button
    Submit,
    /// Space: activate the focused button
    Activate,
    /// Tab
    FocusNext,
    /// Shift+Tab
    FocusPrev,
    /// Arrow keys
    FocusMove {
        /// Row delta
        rows: isize,
        /// Column delta
        cols: isize,
    },
    /// Left click at a terminal cell
    Click {
        /// Column
        x: u16,
        /// Row
        y: u16,
    },
    /// Close the window
    Quit,
    /// Ignored input
    None,
}

/// Input handler that maps terminal events to calculator input
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps any terminal event
    #[must_use]
    pub fn handle_event(&self, event: &Event) -> InputEvent {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => InputEvent::None,
        }
    }

    /// Maps a key event
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> InputEvent {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Windows reports releases too
        if kind == KeyEventKind::Release {
            return InputEvent::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => InputEvent::Quit,
                _ => InputEvent::None,
            };
        }

        match code {
            KeyCode::Char(' ') => InputEvent::Activate,
            KeyCode::Char(c) => KeyAction::from_char(c).map_or(InputEvent::None, InputEvent::Key),
            KeyCode::Delete => InputEvent::Key(KeyAction::Clear),
            KeyCode::Enter => InputEvent::Submit,
            KeyCode::Tab => InputEvent::FocusNext,
            KeyCode::BackTab => InputEvent::FocusPrev,
            KeyCode::Up => InputEvent::FocusMove { rows: -1, cols: 0 },
            KeyCode::Down => InputEvent::FocusMove { rows: 1, cols: 0 },
            KeyCode::Left => InputEvent::FocusMove { rows: 0, cols: -1 },
            KeyCode::Right => InputEvent::FocusMove { rows: 0, cols: 1 },
            KeyCode::Esc => InputEvent::Quit,
            _ => InputEvent::None,
        }
    }

    /// Maps a mouse event; only left-button presses count
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> InputEvent {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => InputEvent::Click {
                x: event.column,
                y: event.row,
            },
            _ => InputEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    // ===== Character input tests =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for c in '0'..='9' {
            let expected = KeyAction::from_char(c).unwrap();
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                InputEvent::Key(expected)
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        let cases = [
            ('+', KeyAction::Add),
            ('-', KeyAction::Subtract),
            ('*', KeyAction::Multiply),
            ('/', KeyAction::Divide),
            ('(', KeyAction::OpenParen),
            (')', KeyAction::CloseParen),
            ('.', KeyAction::Decimal),
            ('=', KeyAction::Equals),
        ];
        for (c, action) in cases {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                InputEvent::Key(action)
            );
        }
    }

    #[test]
    fn test_handle_clear_keys() {
        let handler = InputHandler::new();
        for code in [KeyCode::Char('c'), KeyCode::Char('C'), KeyCode::Delete] {
            assert_eq!(
                handler.handle_key(key_event(code)),
                InputEvent::Key(KeyAction::Clear)
            );
        }
    }

    #[test]
    fn test_unmapped_chars_ignored() {
        let handler = InputHandler::new();
        for c in ['x', '%', '^', 'e'] {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                InputEvent::None
            );
        }
    }

    // ===== Navigation tests =====

    #[test]
    fn test_handle_navigation_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Enter)), InputEvent::Submit);
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char(' '))),
            InputEvent::Activate
        );
        assert_eq!(handler.handle_key(key_event(KeyCode::Tab)), InputEvent::FocusNext);
        assert_eq!(
            handler.handle_key(key_event(KeyCode::BackTab)),
            InputEvent::FocusPrev
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Up)),
            InputEvent::FocusMove { rows: -1, cols: 0 }
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Right)),
            InputEvent::FocusMove { rows: 0, cols: 1 }
        );
    }

    // ===== Quit tests =====

    #[test]
    fn test_handle_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Esc)), InputEvent::Quit);
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            InputEvent::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            InputEvent::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            InputEvent::None
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let handler = InputHandler::new();
        let mut event = key_event(KeyCode::Char('7'));
        event.kind = KeyEventKind::Release;
        assert_eq!(handler.handle_key(event), InputEvent::None);
    }

    // ===== Mouse tests =====

    #[test]
    fn test_left_click() {
        let handler = InputHandler::new();
        let event = Event::Mouse(mouse(MouseEventKind::Down(MouseButton::Left), 4, 9));
        assert_eq!(handler.handle_event(&event), InputEvent::Click { x: 4, y: 9 });
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)),
            InputEvent::None
        );
        assert_eq!(
            handler.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 1, 1)),
            InputEvent::None
        );
        assert_eq!(
            handler.handle_mouse(mouse(MouseEventKind::Moved, 1, 1)),
            InputEvent::None
        );
    }

    #[test]
    fn test_other_events_ignored() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_event(&Event::Resize(80, 24)), InputEvent::None);
        assert_eq!(handler.handle_event(&Event::FocusLost), InputEvent::None);
    }
}
