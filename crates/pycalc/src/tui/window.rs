//! The calculator window: display buffer, keypad and focus.

use ratatui::layout::Rect;

use crate::config::{CalcConfig, WINDOW_CHROME};
use crate::keypad::{KeyAction, Keypad, GRID_COLUMNS, GRID_ROWS};
use crate::view::{CalculatorView, Focus};

/// Screen areas of one rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLayout {
    /// Outer window, border included
    pub window: Rect,
    /// The display line with its border
    pub display: Rect,
    /// The full button grid
    pub keypad: Rect,
}

/// Terminal calculator window
#[derive(Debug, Clone)]
pub struct CalculatorWindow {
    config: CalcConfig,
    display: String,
    keypad: Keypad,
    focus: Focus,
}

impl CalculatorWindow {
    /// Creates a window with an empty display
    #[must_use]
    pub fn new(config: CalcConfig) -> Self {
        Self {
            config,
            display: String::new(),
            keypad: Keypad::new(),
            focus: Focus::Display,
        }
    }

    /// Returns the window configuration
    #[must_use]
    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the keypad for highlight updates
    pub fn keypad_mut(&mut self) -> &mut Keypad {
        &mut self.keypad
    }

    /// Moves focus to the next element (display, then buttons in order)
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Display => Focus::Button(KeyAction::ALL[0]),
            Focus::Button(action) => match self.keypad.find_button(action) {
                Some(index) if index + 1 < self.keypad.button_count() => {
                    Focus::Button(KeyAction::ALL[index + 1])
                }
                _ => Focus::Display,
            },
        };
    }

    /// Moves focus to the previous element
    pub fn focus_prev(&mut self) {
        let last = self.keypad.button_count() - 1;
        self.focus = match self.focus {
            Focus::Display => Focus::Button(KeyAction::ALL[last]),
            Focus::Button(action) => match self.keypad.find_button(action) {
                Some(0) | None => Focus::Display,
                Some(index) => Focus::Button(KeyAction::ALL[index - 1]),
            },
        };
    }

    /// Moves focus across the grid; moving up from the top row reaches the
    /// display, moving down from the display reaches the top-left button
    pub fn move_focus(&mut self, rows: isize, cols: isize) {
        self.focus = match self.focus {
            Focus::Display if rows > 0 => Focus::Button(KeyAction::ALL[0]),
            Focus::Display => Focus::Display,
            Focus::Button(action) => match self.keypad.position_of(action) {
                Some((0, _)) if rows < 0 => Focus::Display,
                _ => Focus::Button(self.keypad.step(action, rows, cols)),
            },
        };
    }

    /// Computes where everything goes inside `area`
    ///
    /// The window is centred and clipped to `area`.
    #[must_use]
    pub fn layout(&self, area: Rect) -> WindowLayout {
        let size = self.config.window_size;
        let width = size.width.min(area.width);
        let height = size.height.min(area.height);
        let window = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );

        let inner_x = window.x.saturating_add(WINDOW_CHROME);
        let inner_y = window.y.saturating_add(WINDOW_CHROME);
        let inner_width = window.width.saturating_sub(WINDOW_CHROME * 2);

        let display = Rect::new(inner_x, inner_y, inner_width, self.config.display_height)
            .intersection(window);

        let button = self.config.button_size;
        let keypad = Rect::new(
            inner_x,
            inner_y.saturating_add(self.config.display_height),
            button.width.saturating_mul(GRID_COLUMNS as u16),
            button.height.saturating_mul(GRID_ROWS as u16),
        )
        .intersection(window);

        WindowLayout {
            window,
            display,
            keypad,
        }
    }

    /// Area of the button at (row, col), relative to the keypad origin
    #[must_use]
    pub fn button_area(&self, keypad: Rect, row: usize, col: usize) -> Rect {
        let button = self.config.button_size;
        Rect::new(
            keypad.x.saturating_add(button.width.saturating_mul(col as u16)),
            keypad.y.saturating_add(button.height.saturating_mul(row as u16)),
            button.width,
            button.height,
        )
        .intersection(keypad)
    }

    /// Maps a click at (x, y) to the button under it
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<KeyAction> {
        let keypad = self.layout(area).keypad;
        if x < keypad.x || y < keypad.y || x >= keypad.right() || y >= keypad.bottom() {
            return None;
        }

        let button = self.config.button_size;
        let col = usize::from((x - keypad.x) / button.width);
        let row = usize::from((y - keypad.y) / button.height);
        self.keypad.get_button_at(row, col).map(|b| b.action)
    }
}

impl CalculatorView for CalculatorWindow {
    fn set_display_text(&mut self, text: &str) {
        text.clone_into(&mut self.display);
        self.focus = Focus::Display;
    }

    fn display_text(&self) -> &str {
        &self.display
    }

    fn key_actions(&self) -> Vec<KeyAction> {
        self.keypad.actions().collect()
    }

    fn focus(&self) -> Focus {
        self.focus
    }
}
