//! Controller: binds key actions to display updates and evaluation.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::core::evaluator::Model;
use crate::keypad::KeyAction;
use crate::view::CalculatorView;

/// What a key action does when triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Append text to the display, replacing an error marker
    BuildExpression(&'static str),
    /// Evaluate the display and show the result
    CalculateResult,
    /// Empty the display
    ClearDisplay,
}

impl Slot {
    /// The slot a key action is wired to
    #[must_use]
    pub const fn for_action(action: KeyAction) -> Self {
        match action {
            KeyAction::Equals => Self::CalculateResult,
            KeyAction::Clear => Self::ClearDisplay,
            _ => match action.text() {
                Some(text) => Self::BuildExpression(text),
                None => Self::ClearDisplay,
            },
        }
    }
}

/// Where the display buffer sits in the input state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferState {
    /// Nothing typed
    Empty,
    /// Input or a result
    Editing,
    /// The error marker is showing
    Error,
}

impl BufferState {
    /// Classifies a display buffer
    #[must_use]
    pub fn of(text: &str, error_marker: &str) -> Self {
        if text.is_empty() {
            Self::Empty
        } else if text == error_marker {
            Self::Error
        } else {
            Self::Editing
        }
    }
}

/// Calculator controller
///
/// Holds the model and the action bindings. The view is borrowed per event,
/// so the event loop stays free to render it between events.
#[derive(Debug)]
pub struct Controller<M> {
    model: M,
    error_marker: String,
    slots: HashMap<KeyAction, Slot>,
}

impl<M: Model> Controller<M> {
    /// Creates a controller and binds every action the view exposes
    pub fn new<V: CalculatorView>(model: M, view: &V, error_marker: impl Into<String>) -> Self {
        let mut controller = Self {
            model,
            error_marker: error_marker.into(),
            slots: HashMap::new(),
        };
        controller.connect_signals_and_slots(view);
        controller
    }

    fn connect_signals_and_slots<V: CalculatorView>(&mut self, view: &V) {
        for action in view.key_actions() {
            self.slots.insert(action, Slot::for_action(action));
        }
        debug!(bindings = self.slots.len(), "connected key actions");
    }

    /// The slot bound to an action, if any
    #[must_use]
    pub fn slot(&self, action: KeyAction) -> Option<Slot> {
        self.slots.get(&action).copied()
    }

    /// Returns the model
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Returns the error marker the controller resets on
    #[must_use]
    pub fn error_marker(&self) -> &str {
        &self.error_marker
    }

    /// Runs the slot bound to `action`
    pub fn trigger<V: CalculatorView>(&self, view: &mut V, action: KeyAction) {
        let Some(slot) = self.slot(action) else {
            trace!(%action, "no slot bound");
            return;
        };
        trace!(%action, ?slot, "dispatch");

        match slot {
            Slot::BuildExpression(text) => self.build_expression(view, text),
            Slot::CalculateResult => self.calculate_result(view),
            Slot::ClearDisplay => view.clear_display(),
        }
    }

    /// Enter pressed on the display
    pub fn submit<V: CalculatorView>(&self, view: &mut V) {
        self.calculate_result(view);
    }

    /// Current buffer state of `view`
    #[must_use]
    pub fn state<V: CalculatorView>(&self, view: &V) -> BufferState {
        BufferState::of(view.display_text(), &self.error_marker)
    }

    fn calculate_result<V: CalculatorView>(&self, view: &mut V) {
        let result = self.model.evaluate(view.display_text());
        view.set_display_text(&result);
    }

    fn build_expression<V: CalculatorView>(&self, view: &mut V, text: &str) {
        if view.display_text() == self.error_marker {
            view.clear_display();
        }

        let expression = format!("{}{text}", view.display_text());
        view.set_display_text(&expression);
    }
}
