//! Keypad widget: draws the 4x5 button grid.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::config::Size;
use crate::keypad::{ButtonKind, KeyAction, Keypad};

/// Buttons shorter than this are drawn without a border
const BORDERED_MIN_HEIGHT: u16 = 3;

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    button: Size,
    focused: Option<KeyAction>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a keypad widget with fixed-size buttons
    #[must_use]
    pub fn new(keypad: &'a Keypad, button: Size) -> Self {
        Self {
            keypad,
            button,
            focused: None,
        }
    }

    /// Marks the button that holds keyboard focus
    #[must_use]
    pub fn focused(mut self, action: Option<KeyAction>) -> Self {
        self.focused = action;
        self
    }
}

/// Base style for a button
#[must_use]
pub fn button_style(kind: ButtonKind, pressed: bool) -> Style {
    if pressed {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    match kind {
        ButtonKind::Number => Style::default().fg(Color::White),
        ButtonKind::Operator => Style::default().fg(Color::Yellow),
        ButtonKind::Paren => Style::default().fg(Color::Cyan),
        ButtonKind::Equals => Style::default().fg(Color::Green),
        ButtonKind::Clear => Style::default().fg(Color::Red),
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let cell = Rect::new(
                area.x
                    .saturating_add(self.button.width.saturating_mul(col as u16)),
                area.y
                    .saturating_add(self.button.height.saturating_mul(row as u16)),
                self.button.width,
                self.button.height,
            )
            .intersection(area);
            if cell.is_empty() {
                continue;
            }

            let mut style = button_style(btn.action.kind(), btn.pressed);
            if self.focused == Some(btn.action) {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let label = Paragraph::new(btn.label())
                .style(style)
                .alignment(Alignment::Center);

            if self.button.height >= BORDERED_MIN_HEIGHT {
                label
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(Color::DarkGray)),
                    )
                    .render(cell, buf);
            } else {
                label.render(cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(widget: KeypadWidget<'_>, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        let area = buf.area;
        (area.x..area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    // ===== Rendering tests =====

    #[test]
    fn test_renders_every_label() {
        let keypad = Keypad::new();
        let buf = rendered(
            KeypadWidget::new(&keypad, Size::new(7, 3)),
            Rect::new(0, 0, 35, 12),
        );

        assert!(row_text(&buf, 1).contains('7'));
        assert!(row_text(&buf, 1).contains('C'));
        assert!(row_text(&buf, 4).contains('('));
        assert!(row_text(&buf, 7).contains(')'));
        assert!(row_text(&buf, 10).contains("00"));
        assert!(row_text(&buf, 10).contains('='));
    }

    #[test]
    fn test_compact_buttons_have_no_border() {
        let keypad = Keypad::new();
        let buf = rendered(
            KeypadWidget::new(&keypad, Size::new(4, 1)),
            Rect::new(0, 0, 20, 4),
        );

        assert_eq!(row_text(&buf, 0).trim(), "7   8   9   /   C");
        assert_eq!(row_text(&buf, 3).trim(), "0   00  .   +   =");
    }

    #[test]
    fn test_clipped_area_does_not_panic() {
        let keypad = Keypad::new();
        let buf = rendered(
            KeypadWidget::new(&keypad, Size::new(7, 3)),
            Rect::new(0, 0, 10, 4),
        );
        assert!(row_text(&buf, 1).contains('7'));
    }

    // ===== Style tests =====

    #[test]
    fn test_pressed_button_is_highlighted() {
        let mut keypad = Keypad::new();
        keypad.highlight(KeyAction::Seven);
        let buf = rendered(
            KeypadWidget::new(&keypad, Size::new(4, 1)),
            Rect::new(0, 0, 20, 4),
        );
        let cell = &buf[(1, 0)];
        assert_eq!(cell.symbol(), "7");
        assert_eq!(cell.bg, Color::Yellow);
    }

    #[test]
    fn test_focused_button_is_reversed() {
        let keypad = Keypad::new();
        let buf = rendered(
            KeypadWidget::new(&keypad, Size::new(4, 1)).focused(Some(KeyAction::Eight)),
            Rect::new(0, 0, 20, 4),
        );
        assert!(buf[(5, 0)].modifier.contains(Modifier::REVERSED));
        assert!(!buf[(1, 0)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_button_style_by_kind() {
        assert_eq!(
            button_style(ButtonKind::Clear, false),
            Style::default().fg(Color::Red)
        );
        assert_eq!(
            button_style(ButtonKind::Equals, false),
            Style::default().fg(Color::Green)
        );
        assert_eq!(button_style(ButtonKind::Number, true).bg, Some(Color::Yellow));
    }
}
