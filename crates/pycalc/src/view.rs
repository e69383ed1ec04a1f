//! The view contract the controller drives.

use crate::keypad::KeyAction;

/// Which element receives Enter and Space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The display line
    #[default]
    Display,
    /// A keypad button
    Button(KeyAction),
}

/// A calculator view: a display buffer plus a set of triggerable actions.
///
/// Views store text and nothing else; what a key press means is decided by
/// the controller.
pub trait CalculatorView {
    /// Replaces the display text and returns focus to the display
    fn set_display_text(&mut self, text: &str);

    /// Current display text
    fn display_text(&self) -> &str;

    /// Actions this view has a trigger for
    fn key_actions(&self) -> Vec<KeyAction>;

    /// Current input focus
    fn focus(&self) -> Focus;

    /// Empties the display
    fn clear_display(&mut self) {
        self.set_display_text("");
    }
}

/// A view with no rendering, for tests and scripted drivers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessView {
    display: String,
    focus: Focus,
}

impl HeadlessView {
    /// Creates an empty view
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves focus, as a click or Tab would
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }
}

impl CalculatorView for HeadlessView {
    fn set_display_text(&mut self, text: &str) {
        text.clone_into(&mut self.display);
        self.focus = Focus::Display;
    }

    fn display_text(&self) -> &str {
        &self.display
    }

    fn key_actions(&self) -> Vec<KeyAction> {
        KeyAction::ALL.to_vec()
    }

    fn focus(&self) -> Focus {
        self.focus
    }
}
